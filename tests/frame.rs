mod tests {
    use apa102_animator::{Duration, Frame, Rgb, Ticker};

    #[test]
    fn test_frame_starts_black() {
        let frame: Frame<8> = Frame::new(0.5, 6);
        assert_eq!(frame.len(), 6);
        assert!(!frame.is_empty());
        assert!(frame.leds().iter().all(|led| *led == Rgb::default()));
    }

    #[test]
    fn test_frame_caps_led_count() {
        let frame: Frame<8> = Frame::new(1.0, 100);
        assert_eq!(frame.len(), 8);
    }

    #[test]
    fn test_brightness_code_is_five_bits() {
        let mut frame: Frame<4> = Frame::new(0.0, 4);
        assert_eq!(frame.brightness_code(), 0);

        frame.set_brightness(1.0);
        assert_eq!(frame.brightness_code(), 31);

        frame.set_brightness(0.5);
        assert_eq!(frame.brightness_code(), 15);

        // Out-of-range scalars clamp instead of overflowing the field.
        frame.set_brightness(7.0);
        assert_eq!(frame.brightness_code(), 31);
        frame.set_brightness(-1.0);
        assert_eq!(frame.brightness_code(), 0);
    }

    #[test]
    fn test_frame_length_is_fixed() {
        let mut frame: Frame<4> = Frame::new(1.0, 4);
        let len = frame.len();
        for led in frame.leds_mut() {
            *led = Rgb::new(1, 2, 3);
        }
        assert_eq!(frame.len(), len);
    }

    #[test]
    fn test_ticker_reports_elapsed_time() {
        let mut ticker = Ticker::new(None);
        std::thread::sleep(std::time::Duration::from_millis(5));
        let dt = ticker.ping();
        assert!(dt >= Duration::from_millis(5));

        // Timestamps are monotonic: a second ping right away still
        // reports a non-negative (here tiny) dt.
        let dt = ticker.ping();
        assert!(dt < Duration::from_millis(5));
    }

    #[test]
    fn test_ticker_enforces_target_period() {
        let target = Duration::from_millis(5);
        let mut ticker = Ticker::new(Some(target));
        assert_eq!(ticker.target(), Some(target));

        for _ in 0..4 {
            assert!(ticker.ping() >= target);
        }
    }

    #[test]
    fn test_ticker_reset_restarts_timing() {
        let mut ticker = Ticker::new(None);
        std::thread::sleep(std::time::Duration::from_millis(5));
        ticker.reset();
        let dt = ticker.ping();
        assert!(dt < Duration::from_millis(5));
    }
}
