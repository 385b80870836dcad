//! Registration of the default options

use super::registry::Settings;
use super::types::OptionValue;

pub const LEAD_IN_TIME: &str = "lead_in_time";
pub const DISPLAY_TIME: &str = "display_time";
pub const LEAD_OUT_TIME: &str = "lead_out_time";
pub const FONT: &str = "font";

const DEF_LEAD_IN_TIME: i64 = 250;
const DEF_DISPLAY_TIME: i64 = 4000;
const DEF_FONT: &str = "Bitstream Vera Sans 14";

/// Register every option with its default value. Called once at startup,
/// before any argument is parsed.
pub fn register(settings: &mut Settings) {
    settings.define(LEAD_IN_TIME, OptionValue::Int(DEF_LEAD_IN_TIME));
    settings.define(DISPLAY_TIME, OptionValue::Int(DEF_DISPLAY_TIME));
    // lead_out_time defaults to whatever lead_in_time holds right now.
    // A one-time copy, not a live link.
    let lead_in = settings.get_int(LEAD_IN_TIME);
    settings.define(LEAD_OUT_TIME, OptionValue::Int(lead_in));
    settings.define(FONT, OptionValue::String(DEF_FONT.to_string()));
}
