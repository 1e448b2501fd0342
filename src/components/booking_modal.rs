use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::prefs::Language;

// The dialog chrome is ours; everything inside the frame belongs to the
// external booking service.
fn modal_title(language: Language) -> &'static str {
    match language {
        Language::Arabic => "ابدأ طلب الجمع الآلي",
        Language::English => "Start Automated Collection Request",
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub open: bool,
    pub language: Language,
    pub on_close: Callback<MouseEvent>,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    if !props.open {
        // Closed means closed: no overlay, no iframe, no resource usage.
        return html! {};
    }

    html! {
        <div class="modal-overlay">
            <div class="modal-dialog" role="dialog" aria-modal="true">
                <div class="modal-header">
                    <h3>{ modal_title(props.language) }</h3>
                    <button class="modal-close" onclick={props.on_close.clone()} aria-label="Close">
                        <Icon kind={IconKind::X} />
                    </button>
                </div>
                <iframe
                    src={config::get_booking_widget_url()}
                    class="modal-frame"
                    title="Automated Waste Collection Bot"
                    sandbox="allow-scripts allow-same-origin allow-forms allow-popups"
                />
            </div>
        </div>
    }
}
