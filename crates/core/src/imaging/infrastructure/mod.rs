pub mod image_file_reader;
pub mod image_file_writer;

/// Swap the first and third channel of every pixel in place.
///
/// Used at the I/O boundary to convert between the `image` crate's RGB
/// order and the pipeline's internal BGR convention (the swap is its own
/// inverse).
pub(crate) fn swap_rb(data: &mut [u8]) {
    for px in data.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_rb_is_involutive() {
        let original = vec![1u8, 2, 3, 4, 5, 6];
        let mut data = original.clone();
        swap_rb(&mut data);
        assert_eq!(data, vec![3, 2, 1, 6, 5, 4]);
        swap_rb(&mut data);
        assert_eq!(data, original);
    }
}
