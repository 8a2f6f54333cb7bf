mod common;

mod tests {
    use embassy_time::Duration;
    use myrtio_strip_player::{PlayerConfig, TickScheduler};

    use super::common::{MemoryStore, TestQueue, at, player};

    #[test]
    fn test_scheduler_keeps_cadence() {
        let queue = TestQueue::new();
        let mut scheduler =
            TickScheduler::new(player(&queue, MemoryStore::default(), &PlayerConfig::default()));

        let result = scheduler.tick(at(0));
        assert!(result.transmitted);
        assert_eq!(result.next_deadline, at(10));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));

        let result = scheduler.tick(at(13));
        assert!(!result.transmitted);
        assert_eq!(result.next_deadline, at(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(7));
    }

    #[test]
    fn test_scheduler_resets_after_stall() {
        let queue = TestQueue::new();
        let mut scheduler = TickScheduler::with_interval(
            player(&queue, MemoryStore::default(), &PlayerConfig::default()),
            Duration::from_millis(20),
        );

        scheduler.tick(at(0));
        let result = scheduler.tick(at(1000));

        assert!(result.transmitted);
        assert_eq!(result.next_deadline, at(1020));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
        assert!(scheduler.player().frame().len() == 50);
    }
}
