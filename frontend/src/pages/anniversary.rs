use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::gallery::MemoryGallery;
use crate::components::reason_list::ReasonList;
use crate::components::reveal::RevealOnScroll;
use crate::config;
use crate::content::{self, MEMORIES, REASONS};

/// Page-level state. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Journey {
    #[default]
    Idle,
    Started,
}

impl Journey {
    pub fn start(self) -> Self {
        Journey::Started
    }

    pub fn is_started(self) -> bool {
        self == Journey::Started
    }
}

pub fn hero_classes(journey: Journey) -> Classes {
    classes!("hero-inner", journey.is_started().then(|| "faded"))
}

pub fn content_classes(journey: Journey) -> Classes {
    let state = if journey.is_started() {
        "journey-open"
    } else {
        "journey-closed"
    };
    classes!("journey", state)
}

fn scroll_into_view(node: &NodeRef) {
    match node.cast::<Element>() {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("Chapters are not mounted, skipping scroll"),
    }
}

#[function_component(AnniversaryPage)]
pub fn anniversary_page() -> Html {
    let journey = use_state(Journey::default);
    let chapters_ref = use_node_ref();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let start_journey = {
        let journey = journey.clone();
        let chapters_ref = chapters_ref.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if journey.is_started() {
                debug!("Journey already started, ignoring click");
                return;
            }
            info!("Starting the journey");
            journey.set(journey.start());

            let chapters_ref = chapters_ref.clone();
            debug!("Scrolling to chapters in {}ms", config::SCROLL_DELAY_MS);
            Timeout::new(config::SCROLL_DELAY_MS, move || {
                scroll_into_view(&chapters_ref);
            })
            .forget();
        })
    };

    let hero_style = format!("transition-duration: {}ms;", config::HERO_FADE_MS);
    let content_style = format!("transition-duration: {}ms;", config::CONTENT_FADE_MS);
    let backdrop_style = format!("background-image: url('{}');", content::BACKDROP_URL);

    html! {
        <div class="anniversary-page" style={backdrop_style}>
            <div class="backdrop-overlay"></div>

            <main class="anniversary-main">
                <section class="hero">
                    <div class={hero_classes(*journey)} style={hero_style}>
                        <h1>{ content::HERO_TITLE }</h1>
                        <p class="hero-subtitle">{ content::HERO_SUBTITLE }</p>
                        <button class="hero-button" onclick={start_journey}>
                            { content::HERO_CALL_TO_ACTION }
                        </button>
                    </div>
                </section>

                <div ref={chapters_ref} class={content_classes(*journey)} style={content_style}>
                    <div class="chapters">
                        <RevealOnScroll>
                            <div class="chapter centered">
                                <h2>{ content::BEGINNING.heading() }</h2>
                                <p>{ content::BEGINNING.body }</p>
                            </div>
                        </RevealOnScroll>

                        <RevealOnScroll>
                            <div class="chapter split">
                                <img
                                    class="chapter-image"
                                    src={content::FIRSTS_PICTURE.url}
                                    alt={content::FIRSTS_PICTURE.alt}
                                />
                                <div>
                                    <h2>{ content::FIRSTS.heading() }</h2>
                                    <p>{ content::FIRSTS.body }</p>
                                </div>
                            </div>
                        </RevealOnScroll>

                        <RevealOnScroll>
                            <div class="chapter centered">
                                <h2>{ content::GALLERY.heading() }</h2>
                                <p class="gallery-intro">{ content::GALLERY.body }</p>
                                <MemoryGallery memories={&MEMORIES[..]} />
                            </div>
                        </RevealOnScroll>

                        <RevealOnScroll>
                            <div class="chapter split">
                                <div class="text-first">
                                    <h2>{ content::THINGS_I_LOVE.heading() }</h2>
                                    <p>{ content::THINGS_I_LOVE.body }</p>
                                    <ReasonList reasons={&REASONS[..]} />
                                </div>
                                <div class="image-last">
                                    <img
                                        class="chapter-image"
                                        src={content::THINGS_I_LOVE_PICTURE.url}
                                        alt={content::THINGS_I_LOVE_PICTURE.alt}
                                    />
                                </div>
                            </div>
                        </RevealOnScroll>

                        <RevealOnScroll>
                            <div class="chapter centered">
                                <h2>{ content::FUTURE.heading() }</h2>
                                <p>{ content::FUTURE.body }</p>
                                <p class="closing-line">{ content::CLOSING_LINE }</p>
                            </div>
                        </RevealOnScroll>
                    </div>

                    <footer class="anniversary-footer">
                        <p>{ content::FOOTER }</p>
                    </footer>
                </div>
            </main>

            <style>
                {r#"
                    .anniversary-page {
                        position: relative;
                        min-height: 100vh;
                        color: #e7e5e4;
                        overflow-x: hidden;
                        background-size: cover;
                        background-position: center;
                        background-attachment: fixed;
                        font-family: 'Lora', Georgia, serif;
                    }
                    .backdrop-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.3);
                        z-index: 0;
                    }
                    .anniversary-main {
                        position: relative;
                        z-index: 10;
                    }
                    .hero {
                        height: 100vh;
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        text-align: center;
                        box-sizing: border-box;
                    }
                    .hero-inner {
                        opacity: 1;
                        transition-property: opacity;
                    }
                    .hero-inner.faded {
                        opacity: 0;
                        pointer-events: none;
                    }
                    .hero h1 {
                        font-family: 'Playfair Display', Georgia, serif;
                        font-size: 6rem;
                        margin: 0;
                        color: #fcd34d;
                        text-shadow: 0 4px 12px rgba(0, 0, 0, 0.5);
                    }
                    .hero-subtitle {
                        margin-top: 1rem;
                        font-size: 1.25rem;
                        color: #d6d3d1;
                    }
                    .hero-button {
                        margin-top: 3rem;
                        padding: 0.75rem 2rem;
                        background: #fbbf24;
                        color: #0f172a;
                        font-weight: bold;
                        font-size: 1rem;
                        border: none;
                        border-radius: 9999px;
                        box-shadow: 0 10px 15px rgba(245, 158, 11, 0.2);
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .hero-button:hover {
                        background: #fcd34d;
                        transform: scale(1.05);
                    }
                    .journey {
                        transition-property: opacity;
                    }
                    .journey-closed {
                        opacity: 0;
                        pointer-events: none;
                    }
                    .journey-open {
                        opacity: 1;
                    }
                    .chapters {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 5rem 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 8rem;
                    }
                    .reveal {
                        transition-property: opacity, transform;
                        transition-timing-function: ease-in-out;
                    }
                    .reveal-hidden {
                        opacity: 0;
                        transform: translateY(2.5rem);
                    }
                    .reveal-shown {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .chapter h2 {
                        font-family: 'Playfair Display', Georgia, serif;
                        font-size: 3rem;
                        margin: 0;
                        color: #fde68a;
                    }
                    .chapter p {
                        margin-top: 1.5rem;
                        font-size: 1.2rem;
                        line-height: 1.75;
                        color: #d6d3d1;
                    }
                    .chapter.centered {
                        text-align: center;
                    }
                    .chapter.centered p {
                        max-width: 42rem;
                        margin-left: auto;
                        margin-right: auto;
                    }
                    .chapter.split {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .chapter-image {
                        width: 100%;
                        height: auto;
                        object-fit: cover;
                        border-radius: 0.5rem;
                        box-shadow: 0 25px 50px rgba(49, 46, 129, 0.5);
                    }
                    .gallery-intro {
                        margin-bottom: 3rem;
                    }
                    .memory-strip {
                        display: flex;
                        gap: 1.5rem;
                        padding-bottom: 1rem;
                        overflow-x: auto;
                        scroll-snap-type: x mandatory;
                        scrollbar-width: thin;
                        scrollbar-color: #fbbf24 #334155;
                    }
                    .memory-card {
                        margin: 0;
                        flex-shrink: 0;
                        width: 18rem;
                        scroll-snap-align: center;
                        transition: transform 0.3s ease;
                    }
                    .memory-card:hover {
                        transform: translateY(-0.5rem);
                    }
                    .memory-card img {
                        width: 100%;
                        height: 24rem;
                        object-fit: cover;
                        border-radius: 0.5rem;
                        box-shadow: 0 20px 25px rgba(49, 46, 129, 0.4);
                    }
                    .memory-card figcaption {
                        margin-top: 0.75rem;
                        text-align: center;
                        color: #d6d3d1;
                        transition: color 0.3s ease;
                    }
                    .memory-card:hover figcaption {
                        color: #fcd34d;
                    }
                    .reason-list {
                        margin-top: 1.5rem;
                        padding: 0;
                        list-style: none;
                    }
                    .reason-list li {
                        display: flex;
                        align-items: flex-start;
                        margin-bottom: 0.75rem;
                    }
                    .reason-icon {
                        width: 1.25rem;
                        height: 1.25rem;
                        margin-right: 0.75rem;
                        margin-top: 0.25rem;
                        flex-shrink: 0;
                        color: #fbbf24;
                    }
                    .closing-line {
                        font-family: 'Playfair Display', Georgia, serif;
                        font-style: italic;
                        font-size: 1.5rem !important;
                        color: #fcd34d !important;
                    }
                    .anniversary-footer {
                        text-align: center;
                        padding: 2.5rem 0;
                        color: #a8a29e;
                    }
                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 3rem;
                        }
                        .chapter h2 {
                            font-size: 2.25rem;
                        }
                        .chapter.split {
                            grid-template-columns: 1fr;
                        }
                        .text-first {
                            order: 2;
                        }
                        .image-last {
                            order: 1;
                        }
                        .memory-card {
                            width: 16rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journey_starts_idle() {
        assert_eq!(Journey::default(), Journey::Idle);
        assert!(!Journey::default().is_started());
    }

    #[test]
    fn starting_is_permanent_and_idempotent() {
        let once = Journey::Idle.start();
        let twice = once.start();
        assert_eq!(once, Journey::Started);
        assert_eq!(twice, Journey::Started);
        assert!(twice.is_started());
    }

    #[test]
    fn idle_hero_is_visible_and_content_closed() {
        let hero = hero_classes(Journey::Idle);
        assert!(hero.contains("hero-inner"));
        assert!(!hero.contains("faded"));

        let content = content_classes(Journey::Idle);
        assert!(content.contains("journey-closed"));
        assert!(!content.contains("journey-open"));
    }

    #[tokio::test]
    async fn first_render_shows_hero_and_hides_chapters() {
        let html = yew::ServerRenderer::<AnniversaryPage>::new().render().await;

        assert!(html.contains(r#"class="hero-inner""#));
        assert!(!html.contains("hero-inner faded"));
        assert!(html.contains(r#"class="journey journey-closed""#));
        assert!(!html.contains("journey journey-open"));
        assert_eq!(html.matches("reveal reveal-hidden").count(), 5);
        assert!(html.contains(content::HERO_CALL_TO_ACTION));
    }

    #[test]
    fn started_hero_fades_and_content_opens() {
        assert_eq!(hero_classes(Journey::Started).to_string(), "hero-inner faded");
        assert_eq!(content_classes(Journey::Started).to_string(), "journey journey-open");
    }
}
