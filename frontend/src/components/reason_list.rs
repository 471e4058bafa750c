use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReasonListProps {
    pub reasons: &'static [&'static str],
}

fn check_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" class="reason-icon" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
            <path
                fill-rule="evenodd"
                d="M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z"
                clip-rule="evenodd"
            />
        </svg>
    }
}

#[function_component(ReasonList)]
pub fn reason_list(props: &ReasonListProps) -> Html {
    html! {
        <ul class="reason-list">
            { for props.reasons.iter().enumerate().map(|(index, reason)| html! {
                <li key={index}>
                    { check_icon() }
                    <span>{ *reason }</span>
                </li>
            }) }
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::REASONS;

    #[tokio::test]
    async fn renders_each_reason_with_one_icon_in_order() {
        let html = yew::ServerRenderer::<ReasonList>::with_props(|| ReasonListProps {
            reasons: &REASONS[..],
        })
        .render()
        .await;

        assert_eq!(html.matches("<li>").count(), REASONS.len());
        assert_eq!(html.matches("<svg").count(), REASONS.len());

        let mut last = 0;
        for item in html.split("<li>").skip(1) {
            assert_eq!(item.matches("<svg").count(), 1);
        }
        for reason in REASONS.iter() {
            let span = format!("<span>{}</span>", reason);
            let position = html.find(&span).unwrap_or_default();
            assert!(position > last, "{} missing or out of order", reason);
            last = position;
        }
    }
}
