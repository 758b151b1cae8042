use wasm_bindgen::JsValue;
use web_sys::{Element, Node};

/// Pads a strip of real slides with its sentinels.
///
/// Clones the last slide to the front and the first slide to the end, so
/// `[1, 2, 3]` becomes `[3', 1, 2, 3, 1']`. Returns the new slide count.
/// Only call this on strips whose markup does not already carry sentinels.
pub fn install_sentinels(strip: &Element) -> Result<usize, JsValue> {
    let first = strip
        .first_element_child()
        .ok_or("slide strip has no slides")?;
    let last = strip
        .last_element_child()
        .ok_or("slide strip has no slides")?;

    let leading = last.clone_node_with_deep(true)?;
    let trailing = first.clone_node_with_deep(true)?;
    let first: &Node = &first;
    strip.insert_before(&leading, Some(first))?;
    strip.append_child(&trailing)?;

    let count = strip.child_element_count() as usize;
    log::debug!("installed sentinels, strip now has {} slides", count);
    Ok(count)
}
