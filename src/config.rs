#[cfg(debug_assertions)]
pub fn get_booking_widget_url() -> &'static str {
    "https://typebot-viewer.panel.sotech.space/eco-crm-booking-staging"  // Staging bot when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_booking_widget_url() -> &'static str {
    "https://typebot-viewer.panel.sotech.space/eco-crm-booking"
}
