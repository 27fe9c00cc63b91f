//! Easing curves, `p` in [0, 1].

/// Strong deceleration: `1 - (1 - p)^5`.
pub fn power4_out(p: f64) -> f64 {
    let inv = 1.0 - p.clamp(0.0, 1.0);
    1.0 - inv.powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power4_out_hits_endpoints_and_front_loads_motion() {
        assert_eq!(power4_out(0.0), 0.0);
        assert_eq!(power4_out(1.0), 1.0);
        assert!(power4_out(0.25) > 0.75);
        assert!(power4_out(0.5) > 0.5);
    }
}
