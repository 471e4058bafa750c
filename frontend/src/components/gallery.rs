use yew::prelude::*;

use crate::content::Memory;

#[derive(Properties, PartialEq)]
pub struct MemoryGalleryProps {
    pub memories: &'static [Memory],
}

/// Horizontal strip of photos that snaps to each card.
#[function_component(MemoryGallery)]
pub fn memory_gallery(props: &MemoryGalleryProps) -> Html {
    html! {
        <div class="memory-strip">
            { for props.memories.iter().map(|memory| html! {
                <figure key={memory.id} class="memory-card">
                    <img src={memory.image_url} alt={memory.caption} loading="lazy" />
                    <figcaption>{ memory.caption }</figcaption>
                </figure>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MEMORIES;

    async fn render(memories: &'static [Memory]) -> String {
        yew::ServerRenderer::<MemoryGallery>::with_props(move || MemoryGalleryProps { memories })
            .render()
            .await
    }

    #[tokio::test]
    async fn renders_every_memory_once_in_order() {
        let html = render(&MEMORIES[..]).await;

        assert_eq!(html.matches("<img").count(), MEMORIES.len());
        assert_eq!(html.matches("<figcaption>").count(), MEMORIES.len());

        let mut last = 0;
        for memory in MEMORIES.iter() {
            let src = format!(r#"src="{}""#, memory.image_url);
            assert_eq!(html.matches(&src).count(), 1, "{}", memory.image_url);
            let position = html.find(&src).unwrap_or_default();
            assert!(position >= last, "{} out of order", memory.image_url);
            last = position;

            let caption = format!("<figcaption>{}</figcaption>", memory.caption);
            assert!(html.contains(&caption), "missing caption {}", memory.caption);
            assert!(html.contains(&format!(r#"alt="{}""#, memory.caption)));
        }
    }

    #[tokio::test]
    async fn empty_gallery_renders_an_empty_strip() {
        let html = render(&[]).await;
        assert!(html.contains("memory-strip"));
        assert!(!html.contains("<img"));
    }
}
