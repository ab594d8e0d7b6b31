/// Calculates the top and bottom padding needed for a single line of text
/// with the given size and line-height multiplier to reach `height`.
pub fn padding_needed_for_height(height: f32, text_size: f32, line_height: f32) -> f32 {
    ((height - text_size * line_height) / 2.).max(0.).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_needed_for_height() {
        assert_eq!(padding_needed_for_height(40., 16., 1.5), 8.);
        assert_eq!(padding_needed_for_height(36., 14., 1.5), 7.);
        assert_eq!(padding_needed_for_height(10., 16., 1.5), 0.);
    }
}
