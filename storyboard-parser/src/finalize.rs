//! Element timing and final draw order

use crate::{Diagnostic, DiagnosticKind};
use storyboard_core::Element;

/// Resolves element timing, then sorts by layer and start time and
/// assigns dense z-indices.
pub fn finalize(elements: &mut [Element], diagnostics: &mut Vec<Diagnostic>) {
    for element in elements.iter_mut() {
        if !resolve_timing(element) {
            let diagnostic = Diagnostic::new(
                0,
                "",
                DiagnosticKind::NoAnimations {
                    file: element.file().to_string(),
                },
            );
            diagnostic.emit();
            diagnostics.push(diagnostic);
        }
    }

    sort_elements(elements);
}

/// Sorts the element's animations by start time and derives its lifetime.
///
/// Returns `false`, leaving the timing untouched, when there are no animations.
pub fn resolve_timing(element: &mut Element) -> bool {
    element
        .animations
        .sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

    if element.animations.is_empty() {
        return false;
    }

    let (start, end) = element
        .animations
        .iter()
        .fold((f64::MAX, f64::MIN), |(start, end), a| {
            (start.min(a.start_time), end.max(a.end_time()))
        });

    element.start_time = start;
    element.end_time = end;
    true
}

/// Stable sort by `(layer, start_time)`, then numbers the result
pub fn sort_elements(elements: &mut [Element]) {
    elements.sort_by(|a, b| {
        a.layer
            .cmp(&b.layer)
            .then_with(|| a.start_time.total_cmp(&b.start_time))
    });

    for (index, element) in elements.iter_mut().enumerate() {
        element.z_index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyboard_core::{Anchor, Animation, AnimationType, Easing, Layer};

    fn element(file: &str, layer: Layer, starts: &[f64]) -> Element {
        let mut element = Element::sprite(layer, Anchor::TopLeft, file, 0.0, 0.0);
        for &start in starts {
            element
                .animations
                .push(Animation::new(AnimationType::Fade, start, 100.0, Easing::None, "0", "1"));
        }
        element
    }

    fn files(elements: &[Element]) -> Vec<&str> {
        elements.iter().map(Element::file).collect()
    }

    #[test]
    fn test_timing_and_animation_order() {
        let mut el = element("a.png", Layer::Background, &[500.0, 100.0, 300.0]);
        assert!(resolve_timing(&mut el));
        assert_eq!((el.start_time, el.end_time), (100.0, 600.0));

        let starts: Vec<f64> = el.animations.iter().map(|a| a.start_time).collect();
        assert_eq!(starts, vec![100.0, 300.0, 500.0]);
    }

    #[test]
    fn test_equal_starts_keep_insertion_order() {
        let mut el = element("a.png", Layer::Background, &[]);
        el.animations.push(Animation::new(AnimationType::MoveX, 0.0, 10.0, Easing::None, "1", "2"));
        el.animations.push(Animation::new(AnimationType::MoveY, 0.0, 10.0, Easing::None, "3", "4"));
        resolve_timing(&mut el);
        assert_eq!(el.animations[0].kind, AnimationType::MoveX);
        assert_eq!(el.animations[1].kind, AnimationType::MoveY);
    }

    #[test]
    fn test_sort_by_layer_then_start() {
        let mut elements = vec![
            element("overlay.png", Layer::Overlay, &[0.0]),
            element("late-bg.png", Layer::Background, &[2000.0]),
            element("fg.png", Layer::Foreground, &[0.0]),
            element("first-bg.png", Layer::Background, &[1000.0]),
            element("second-bg.png", Layer::Background, &[1000.0]),
        ];
        let mut diagnostics = Vec::new();
        finalize(&mut elements, &mut diagnostics);

        assert!(diagnostics.is_empty());
        assert_eq!(
            files(&elements),
            vec!["first-bg.png", "second-bg.png", "late-bg.png", "fg.png", "overlay.png"]
        );
        let z: Vec<usize> = elements.iter().map(|e| e.z_index).collect();
        assert_eq!(z, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_element_without_animations_is_kept() {
        let mut elements = vec![
            element("static.png", Layer::Background, &[]),
            element("moving.png", Layer::Background, &[50.0]),
        ];
        let mut diagnostics = Vec::new();
        finalize(&mut elements, &mut diagnostics);

        assert_eq!(elements.len(), 2);
        assert_eq!(files(&elements), vec!["static.png", "moving.png"]);
        assert_eq!((elements[0].start_time, elements[0].end_time), (0.0, 0.0));
        assert_eq!(
            diagnostics,
            vec![Diagnostic::new(
                0,
                "",
                DiagnosticKind::NoAnimations { file: "static.png".into() }
            )]
        );
    }
}
