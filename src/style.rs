use reveal_core::{Phase, PreviewFrame, PreviewTransform};

use crate::constants::STEADY_TRANSITION;

/// CSS transform for a preview. Offsets are relative to the viewport center;
/// the element is centered on that point first.
#[inline]
pub fn transform_css(t: &PreviewTransform) -> String {
    format!(
        "translate(-50%, -50%) translate({:.2}px, {:.2}px) rotate({:.2}deg) scale({:.4})",
        t.x, t.y, t.rotation_deg, t.scale
    )
}

/// Full inline style for a preview element.
pub fn preview_style(frame: &PreviewFrame) -> String {
    // enter/exit are driven frame by frame; only steady moves are eased
    let transition = match frame.phase {
        Phase::Steady => STEADY_TRANSITION,
        _ => "none",
    };
    format!(
        "position:absolute;left:50%;top:50%;width:{:.0}px;transform:{};opacity:{:.3};z-index:{};transition:{};",
        frame.width_px,
        transform_css(&frame.transform),
        frame.transform.opacity.clamp(0.0, 1.0),
        frame.z_index,
        transition
    )
}

/// Alt text for a preview image, numbered from one.
#[inline]
pub fn preview_alt(title_id: &str, index: usize) -> String {
    format!("{} scene {}", title_id, index + 1)
}

/// Parse a normalizer override; anything that is not a positive finite
/// number is ignored.
pub fn parse_normalizer(raw: &str) -> Option<f32> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}
