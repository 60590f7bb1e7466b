//! Text input standing in for clicks on the relay controls.

use relayboard_domain::relay::RelayId;

/// Parse one input line into the relay it targets.
///
/// Accepts a bare relay key (`2`) or `toggle <key>`. Blank lines and anything
/// else yield `None`, the equivalent of a click that did not land on a relay
/// control.
#[must_use]
pub fn parse_click(line: &str) -> Option<RelayId> {
    let mut words = line.split_whitespace();
    let first = words.next()?;
    let key = match (first, words.next()) {
        ("toggle", Some(key)) => key,
        (key, None) if key != "toggle" => key,
        _ => return None,
    };
    if words.next().is_some() {
        return None;
    }
    RelayId::new(key).ok()
}
