mod tests {
    use myrtio_led_fader::{EasingTable, GAMMA_2_2, LINEAR, MAX_LEVEL, S_CURVE};

    static THREE: EasingTable = EasingTable::new(&[0.0, 0.5, 1.0]);

    #[test]
    fn test_generated_easing_tables() {
        for table in [&S_CURVE, &LINEAR] {
            assert_eq!(table.len(), 256);
            assert_eq!(table.fraction(0), 0.0);
            assert_eq!(table.fraction(255), 1.0);
            for i in 1..table.len() {
                assert!(table.fraction(i) >= table.fraction(i - 1));
            }
        }
    }

    #[test]
    fn test_s_curve_is_eased() {
        // Slow start, fast middle, slow end
        assert!(S_CURVE.fraction(16) < LINEAR.fraction(16));
        assert!((S_CURVE.fraction(128) - 0.5).abs() < 0.01);
        assert!(S_CURVE.fraction(240) > LINEAR.fraction(240));
    }

    #[test]
    fn test_index_at_floor_and_clamp() {
        assert_eq!(THREE.index_at(0, 100), (0, false));
        assert_eq!(THREE.index_at(49, 100), (0, false));
        assert_eq!(THREE.index_at(50, 100), (1, false));
        assert_eq!(THREE.index_at(99, 100), (1, false));
        assert_eq!(THREE.index_at(100, 100), (2, true));
        assert_eq!(THREE.index_at(10_000, 100), (2, true));
    }

    #[test]
    fn test_index_at_large_values() {
        assert_eq!(S_CURVE.index_at(u64::MAX - 1, u64::MAX), (254, false));
    }

    #[test]
    fn test_gamma_table() {
        assert_eq!(GAMMA_2_2.correct(0), 0);
        assert_eq!(GAMMA_2_2.correct(MAX_LEVEL), MAX_LEVEL);
        assert_eq!(GAMMA_2_2.max_output(), MAX_LEVEL);
        assert!(GAMMA_2_2.correct(2048) < 1024);

        let mut previous = 0;
        for level in 0..=MAX_LEVEL {
            let corrected = GAMMA_2_2.correct(level);
            assert!(corrected >= previous);
            previous = corrected;
        }
    }

    #[test]
    #[should_panic(expected = "outside of the gamma table")]
    fn test_gamma_out_of_range_panics() {
        GAMMA_2_2.correct(MAX_LEVEL + 1);
    }
}
