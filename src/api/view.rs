use crate::core::Options;
use crate::js::typecast;

pub const VIEW_KEY: &str = "view";

/// Literal emitted for the chart wrapper's `view` when none is configured.
pub const EMPTY_VIEW: &str = "''";

/// Splits the `view` entry out of an options bag.
///
/// Returns the serialized view (or [`EMPTY_VIEW`]) and the remaining options,
/// leaving the input untouched.
#[must_use]
pub fn partition_view(options: &Options) -> (String, Options) {
    let mut remainder = options.clone();
    let view = take_view(&mut remainder);
    (view, remainder)
}

pub(crate) fn take_view(options: &mut Options) -> String {
    match options.shift_remove(VIEW_KEY) {
        Some(view) if !view.is_null() => typecast(&view),
        _ => EMPTY_VIEW.to_owned(),
    }
}
