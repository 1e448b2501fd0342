use log::{info, warn, Level};
use stylist::yew::Global;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

mod config;
mod content;
mod prefs;
mod components {
    pub mod animated;
    pub mod booking_modal;
    pub mod icons;
}
mod pages {
    pub mod landing;
}

use components::booking_modal::BookingModal;
use components::icons::{Icon, IconKind};
use content::{ContentBundle, NavContent};
use pages::landing::Landing;
use prefs::{Language, Preferences, ThemeMode};

const GLOBAL_STYLES: &str = include_str!("../assets/landing.css");

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub nav: NavContent,
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<MouseEvent>,
    pub on_toggle_language: Callback<MouseEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 40);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation must go through, so no prevent_default here.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo">
                    <Icon kind={IconKind::Trash2} class="logo-icon" />
                    <span>{"Eco-CRM"}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#hero" class="nav-link" onclick={close_menu.clone()}>
                        { &props.nav.home }
                    </a>
                    <a href="#solution" class="nav-link" onclick={close_menu.clone()}>
                        { &props.nav.solution }
                    </a>
                    <a href="#contact" class="nav-link" onclick={close_menu.clone()}>
                        { &props.nav.contact }
                    </a>
                    <button
                        class="theme-toggle"
                        onclick={props.on_toggle_theme.clone()}
                        aria-label="Toggle theme"
                    >
                        { if props.theme.is_dark() {
                            html! { <Icon kind={IconKind::Sun} /> }
                        } else {
                            html! { <Icon kind={IconKind::Moon} /> }
                        } }
                    </button>
                    <button class="lang-toggle" onclick={props.on_toggle_language.clone()}>
                        { &props.nav.lang_toggle }
                    </button>
                </div>
            </div>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    let preferences = use_state(Preferences::load);
    let booking_open = use_state(|| false);
    let bundle = use_memo(|_| ContentBundle::load_or_default(), ());

    // Each preference gets its own scoped effect: a language change never
    // re-runs the theme side effect, and vice versa. Both also run once on
    // mount to apply the persisted state to a fresh document.
    {
        let language = preferences.language;
        use_effect_with_deps(
            move |lang: &Language| {
                prefs::apply_language(*lang);
                || ()
            },
            language,
        );
    }
    {
        let theme = preferences.theme;
        use_effect_with_deps(
            move |theme: &ThemeMode| {
                prefs::apply_theme(*theme);
                || ()
            },
            theme,
        );
    }

    let on_toggle_language = {
        let preferences = preferences.clone();
        Callback::from(move |_: MouseEvent| {
            let next = Preferences {
                language: preferences.language.toggled(),
                ..*preferences
            };
            info!("switching language to {}", next.language.as_str());
            preferences.set(next);
        })
    };

    let on_toggle_theme = {
        let preferences = preferences.clone();
        Callback::from(move |_: MouseEvent| {
            let next = Preferences {
                theme: preferences.theme.toggled(),
                ..*preferences
            };
            info!("switching theme to {}", next.theme.as_str());
            preferences.set(next);
        })
    };

    let open_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_: MouseEvent| booking_open.set(true))
    };

    let close_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_: MouseEvent| booking_open.set(false))
    };

    let content = bundle.for_language(preferences.language).clone();

    html! {
        <>
            <Global css={GLOBAL_STYLES} />
            <div class="page">
                <Nav
                    nav={content.nav.clone()}
                    theme={preferences.theme}
                    on_toggle_theme={on_toggle_theme}
                    on_toggle_language={on_toggle_language}
                />
                <Landing content={content} on_open_booking={open_booking} />
                <BookingModal
                    open={*booking_open}
                    language={preferences.language}
                    on_close={close_booking}
                />
            </div>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Eco-CRM landing");

    match window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("root"))
    {
        Some(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        None => warn!("no #root mount point found, nothing to render"),
    }
}
