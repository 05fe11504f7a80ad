#![allow(dead_code)]

use lopdf::content::Operation;
use lopdf::{Document as LopdfDocument, Object};

/// Strings shown with `Tj`, in content-stream order.
pub fn shown_strings(ops: &[Operation]) -> Vec<String> {
    ops.iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        })
        .collect()
}

/// Operands of every `re` operator as `[x, y, width, height]` in PDF space.
pub fn rectangles(ops: &[Operation]) -> Vec<[f32; 4]> {
    ops.iter()
        .filter(|op| op.operator == "re")
        .filter_map(|op| {
            let nums: Vec<f32> = op.operands.iter().filter_map(|o| o.as_float().ok()).collect();
            match nums.as_slice() {
                [x, y, w, h] => Some([*x, *y, *w, *h]),
                _ => None,
            }
        })
        .collect()
}

pub fn count_operator(ops: &[Operation], operator: &str) -> usize {
    ops.iter().filter(|op| op.operator == operator).count()
}

/// Number of image XObjects stored in the document.
pub fn image_xobject_count(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter(|obj| match obj {
            Object::Stream(stream) => stream
                .dict
                .get(b"Subtype")
                .and_then(|s| s.as_name())
                .is_ok_and(|name| name == b"Image"),
            _ => false,
        })
        .count()
}

pub fn media_box(doc: &LopdfDocument) -> Option<Vec<f32>> {
    let page_id = *doc.get_pages().values().next()?;
    let page = doc.get_dictionary(page_id).ok()?;
    let media_box = page.get(b"MediaBox").ok()?.as_array().ok()?;
    Some(media_box.iter().filter_map(|o| o.as_float().ok()).collect())
}
