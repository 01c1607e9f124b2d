mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_led_fader::{
        AnimationStatus, ChannelId, CommandQueue, Controller, EasingTable, FadeCommand,
        FaderConfig, PwmDriver, TickScheduler,
    };

    static HALF: EasingTable = EasingTable::new(&[0.0, 0.5, 1.0]);

    const CONFIG: FaderConfig = FaderConfig {
        easing: &HALF,
        gamma: None,
    };

    #[derive(Default)]
    struct Recorder {
        writes: Vec<(ChannelId, u16)>,
    }

    impl PwmDriver for Recorder {
        fn set_level(&mut self, channel: ChannelId, level: u16) {
            self.writes.push((channel, level));
        }
    }

    fn fade(channel: ChannelId, level: u32, duration_ms: u64) -> FadeCommand {
        FadeCommand {
            channel,
            level,
            duration: Duration::from_millis(duration_ms),
        }
    }

    #[test]
    fn test_queue_is_bounded() {
        let queue = CommandQueue::<2>::new();
        let producer = queue.producer();
        assert_eq!(producer.submit(fade(0, 1, 0)), Ok(()));
        assert_eq!(producer.submit(fade(0, 2, 0)), Ok(()));
        assert_eq!(producer.submit(fade(0, 3, 0)), Err(fade(0, 3, 0)));
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.take(), Some(fade(0, 1, 0)));
        assert_eq!(queue.take(), Some(fade(0, 2, 0)));
        assert_eq!(queue.take(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_init_drives_channels_off() {
        let queue = CommandQueue::<4>::new();
        let mut driver = Recorder::default();
        let mut controller = Controller::<3, 4>::new(&queue, &CONFIG);
        controller.init(&mut driver);
        assert_eq!(driver.writes, vec![(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn test_commands_arm_addressed_fader() {
        let queue = CommandQueue::<4>::new();
        let mut driver = Recorder::default();
        let mut controller = Controller::<2, 4>::new(&queue, &CONFIG);

        queue.producer().submit(fade(1, 4095, 100)).unwrap();
        let status = controller.tick(Instant::from_millis(0), &mut driver);
        assert_eq!(status, AnimationStatus::Active);
        assert!(!controller.fader(0).unwrap().is_active());
        assert!(controller.fader(1).unwrap().is_active());

        controller.tick(Instant::from_millis(50), &mut driver);
        assert_eq!(controller.fader(1).unwrap().current_level(), 2048);

        let status = controller.tick(Instant::from_millis(100), &mut driver);
        assert_eq!(status, AnimationStatus::Stopped);
        assert_eq!(driver.writes, vec![(1, 0), (1, 2048), (1, 4095)]);
    }

    #[test]
    fn test_unknown_channel_is_dropped() {
        let queue = CommandQueue::<4>::new();
        let mut driver = Recorder::default();
        let mut controller = Controller::<2, 4>::new(&queue, &CONFIG);

        queue.submit(fade(9, 4095, 0)).unwrap();
        let status = controller.tick(Instant::from_millis(0), &mut driver);
        assert_eq!(status, AnimationStatus::Stopped);
        assert!(driver.writes.is_empty());
        assert!(queue.is_empty());
        assert!(controller.fader(9).is_none());
        assert_eq!(
            controller.arm(9, 1, Duration::from_millis(0), Instant::from_millis(0)),
            Err(9)
        );
    }

    #[test]
    fn test_status_waits_for_every_channel() {
        let queue = CommandQueue::<4>::new();
        let mut driver = Recorder::default();
        let mut controller = Controller::<2, 4>::new(&queue, &CONFIG);
        let start = Instant::from_millis(0);
        controller.arm(0, 100, Duration::from_millis(10), start).unwrap();
        controller.arm(1, 100, Duration::from_millis(30), start).unwrap();

        assert_eq!(
            controller.tick(Instant::from_millis(20), &mut driver),
            AnimationStatus::Active
        );
        assert_eq!(
            controller.tick(Instant::from_millis(30), &mut driver),
            AnimationStatus::Stopped
        );
    }

    #[test]
    fn test_scheduler_pacing_and_drift_reset() {
        let queue = CommandQueue::<4>::new();
        let controller = Controller::<1, 4>::new(&queue, &CONFIG);
        let mut scheduler = TickScheduler::new(controller, Recorder::default());

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(5));
        assert_eq!(result.sleep_duration, Duration::from_millis(5));
        assert_eq!(result.status, AnimationStatus::Stopped);

        let result = scheduler.tick(Instant::from_millis(7));
        assert_eq!(result.next_deadline, Instant::from_millis(10));
        assert_eq!(result.sleep_duration, Duration::from_millis(3));

        // Stalled for a long time: skip the backlog
        let result = scheduler.tick(Instant::from_millis(100));
        assert_eq!(result.next_deadline, Instant::from_millis(105));
        assert_eq!(result.sleep_duration, Duration::from_millis(5));
    }

    #[test]
    fn test_scheduler_drives_queued_fade() {
        let queue = CommandQueue::<4>::new();
        let controller = Controller::<1, 4>::new(&queue, &CONFIG);
        let mut scheduler = TickScheduler::with_tick_duration(
            controller,
            Recorder::default(),
            Duration::from_millis(50),
        );

        queue.submit(fade(0, 4095, 100)).unwrap();
        let mut now = Instant::from_millis(0);
        loop {
            let result = scheduler.tick(now);
            if result.status == AnimationStatus::Stopped {
                break;
            }
            now = result.next_deadline;
        }

        assert_eq!(scheduler.driver().writes, vec![(0, 0), (0, 2048), (0, 4095)]);
        assert_eq!(
            scheduler.controller().fader(0).unwrap().current_level(),
            4095
        );
    }
}
