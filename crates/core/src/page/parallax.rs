pub const ORB_SELECTOR: &str = ".hero-orb";

/// Pointer position mapped to [-1, 1] on both axes (0 at the viewport centre).
pub fn normalized_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    ((client_x / width - 0.5) * 2.0, (client_y / height - 0.5) * 2.0)
}

/// `transform` for the `index`-th orb; later orbs move further.
pub fn orb_transform(index: usize, pointer: (f64, f64)) -> String {
    let speed = (index + 1) as f64 * 10.0;
    format!("translate({}px, {}px)", pointer.0 * speed, pointer.1 * speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_origin() {
        assert_eq!(normalized_pointer(400.0, 300.0, 800.0, 600.0), (0.0, 0.0));
        assert_eq!(normalized_pointer(0.0, 600.0, 800.0, 600.0), (-1.0, 1.0));
        assert_eq!(normalized_pointer(5.0, 5.0, 0.0, 600.0), (0.0, 0.0));
    }

    #[test]
    fn speed_grows_with_index() {
        assert_eq!(orb_transform(0, (1.0, -0.5)), "translate(10px, -5px)");
        assert_eq!(orb_transform(2, (1.0, -0.5)), "translate(30px, -15px)");
    }
}
