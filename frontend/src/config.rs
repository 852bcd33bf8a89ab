use log::Level;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

// Credentials are baked in at build time, e.g.
// EMAILJS_SERVICE_ID=service_x trunk build --release
pub fn emailjs_service_id() -> &'static str {
    option_env!("EMAILJS_SERVICE_ID").unwrap_or("YOUR_SERVICE_ID")
}

pub fn emailjs_template_id() -> &'static str {
    option_env!("EMAILJS_TEMPLATE_ID").unwrap_or("YOUR_TEMPLATE_ID")
}

pub fn emailjs_public_key() -> &'static str {
    option_env!("EMAILJS_PUBLIC_KEY").unwrap_or("YOUR_PUBLIC_KEY")
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
