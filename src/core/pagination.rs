//! Pagination bullets: labels and track offset.

/// Label for the bullet at `index`.  The final slide is a teaser and shows
/// `?` instead of its number.
pub fn bullet_label(index: usize, count: usize) -> String {
    if index + 1 == count {
        "?".to_string()
    } else {
        (index + 1).to_string()
    }
}

/// Vertical shift of the bullet track that brings the active bullet to the
/// top of the pagination area.
pub fn track_offset(active: usize, bullet_height: u16) -> i32 {
    -(active as i32) * i32::from(bullet_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_bullet_is_a_question_mark() {
        let labels: Vec<String> = (0..4).map(|i| bullet_label(i, 4)).collect();
        assert_eq!(labels, vec!["1", "2", "3", "?"]);
    }

    #[test]
    fn single_slide_is_only_the_teaser() {
        assert_eq!(bullet_label(0, 1), "?");
    }

    #[test]
    fn offset_scales_with_bullet_height() {
        assert_eq!(track_offset(0, 3), 0);
        assert_eq!(track_offset(2, 3), -6);
    }
}
