mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    use apa102_animator::{
        Apa102Drawer, Breath, BreathMode, Duration, OutputLine, Rainbow, Rgb,
    };

    const LEDS: usize = 4;
    const QUEUE: usize = 8;

    /// Shared bus state: the data line level plus every bit latched by a
    /// rising clock edge.
    #[derive(Default)]
    struct Bus {
        data_level: bool,
        bits: Vec<bool>,
    }

    struct DataLine(Rc<RefCell<Bus>>);
    struct ClockLine(Rc<RefCell<Bus>>);

    impl OutputLine for DataLine {
        fn set_high(&mut self) {
            self.0.borrow_mut().data_level = true;
        }

        fn set_low(&mut self) {
            self.0.borrow_mut().data_level = false;
        }
    }

    impl OutputLine for ClockLine {
        fn set_high(&mut self) {
            let mut bus = self.0.borrow_mut();
            let level = bus.data_level;
            bus.bits.push(level);
        }

        fn set_low(&mut self) {}
    }

    fn make_drawer(
        target_dt: Option<Duration>,
    ) -> (Apa102Drawer<DataLine, ClockLine, LEDS, QUEUE>, Rc<RefCell<Bus>>) {
        let bus = Rc::new(RefCell::new(Bus::default()));
        let drawer = Apa102Drawer::new(
            DataLine(Rc::clone(&bus)),
            ClockLine(Rc::clone(&bus)),
            target_dt,
        );
        (drawer, bus)
    }

    fn captured_bytes(bus: &Rc<RefCell<Bus>>) -> Vec<u8> {
        let bits = &bus.borrow().bits;
        assert_eq!(bits.len() % 8, 0, "byte-misaligned bit stream");
        bits.chunks(8)
            .map(|byte| byte.iter().fold(0u8, |acc, bit| (acc << 1) | u8::from(*bit)))
            .collect()
    }

    fn red_cycle() -> BreathMode {
        let mut colors = heapless::Vec::new();
        colors.push(Rgb::new(255, 0, 0)).unwrap();
        BreathMode::Cycle(colors)
    }

    #[test]
    fn test_stop_blanks_the_strip() {
        let (mut drawer, bus) = make_drawer(None);
        drawer.stop(32);

        let bytes = captured_bytes(&bus);
        // 4 start bytes, 4 per LED, 32/16 filler bytes.
        assert_eq!(bytes.len(), 4 + 4 * 32 + 2);
        assert!(bytes[..4].iter().all(|byte| *byte == 0x00));
        for led in bytes[4..4 + 4 * 32].chunks(4) {
            assert_eq!(led, [0xE0, 0x00, 0x00, 0x00]);
        }
        assert!(bytes[4 + 4 * 32..].iter().all(|byte| *byte == 0x00));
    }

    #[test]
    fn test_run_with_empty_queue_is_noop() {
        let (mut drawer, bus) = make_drawer(None);
        drawer.run();

        assert!(bus.borrow().bits.is_empty());
        assert_eq!(drawer.stats().frames(), 0);
    }

    #[test]
    fn test_run_renders_queued_animations() {
        let (mut drawer, bus) = make_drawer(Some(Duration::from_millis(2)));

        drawer
            .enqueue(Breath::<LEDS>::new(
                Duration::from_millis(20),
                Duration::from_millis(10),
                1.0,
                LEDS,
                red_cycle(),
            ))
            .unwrap();
        drawer
            .enqueue(Rainbow::<LEDS>::new(
                Duration::from_millis(20),
                Duration::from_millis(20),
                1.0,
                LEDS,
                1.0,
                1.0,
                1.0,
                1,
            ))
            .unwrap();
        assert_eq!(drawer.queue_len(), 2);

        drawer.run();

        assert_eq!(drawer.queue_len(), 0);
        assert_eq!(drawer.known_len(), LEDS);

        let stats = drawer.stats();
        assert!(stats.frames() > 0);
        assert!(stats.elapsed() >= Duration::from_millis(40));
        assert!(stats.updates_per_second() > 0.0);

        // Every rendered frame is 4 start bytes plus 4 bytes per LED;
        // under 16 LEDs there is no end-frame filler.
        let bytes = captured_bytes(&bus);
        let frame_len = 4 + 4 * LEDS;
        assert_eq!(bytes.len() as u64, stats.frames() * frame_len as u64);

        for frame in bytes.chunks(frame_len) {
            assert!(frame[..4].iter().all(|byte| *byte == 0x00));
            for led in frame[4..].chunks(4) {
                // Full brightness marker byte, then B, G, R.
                assert_eq!(led[0], 0xE0 | 0x1F);
            }
        }
    }

    #[test]
    fn test_wire_order_is_bgr() {
        // A strobe never updates its color, so with a duty of 1.0-ish
        // lit phase the payload is the flash color verbatim.
        let (mut drawer, bus) = make_drawer(Some(Duration::from_millis(2)));
        drawer
            .enqueue(apa102_animator::Strobe::<LEDS>::new(
                Duration::from_millis(4),
                1.0,
                1,
                Rgb::new(10, 20, 30),
                Duration::from_secs(1),
                0.999,
            ))
            .unwrap();
        drawer.run();

        let bytes = captured_bytes(&bus);
        // First frame: start frame, then marker + BGR payload.
        assert_eq!(&bytes[4..8], [0xFF, 30, 20, 10]);
    }

    #[test]
    fn test_enqueue_full_queue_returns_animation() {
        let (mut drawer, _bus) = make_drawer(None);
        let make = || {
            Breath::<LEDS>::new(
                Duration::from_millis(10),
                Duration::from_millis(10),
                1.0,
                LEDS,
                BreathMode::Random { seed: 1 },
            )
        };

        for _ in 0..QUEUE {
            drawer.enqueue(make()).unwrap();
        }
        assert!(drawer.enqueue(make()).is_err());
        assert_eq!(drawer.queue_len(), QUEUE);
    }
}
