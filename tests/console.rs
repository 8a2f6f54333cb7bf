mod common;

mod tests {
    use myrtio_strip_player::{
        Command, CommandError, PatternId, PlayerConfig, StatusChanges,
        console::{CONSOLE_COMMANDS, parse_console},
    };

    use super::common::{MemoryStore, TestQueue, player};

    #[test]
    fn test_console_info() {
        let queue = TestQueue::new();
        let mut player = player(&queue, MemoryStore::default(), &PlayerConfig::default());
        let mut out = String::new();

        assert_eq!(player.run_console(&["info"], &mut out), Ok(StatusChanges::NONE));
        assert_eq!(
            out,
            "blink, 50 leds, on, playlist off, patternDuration=30\n+OK\n"
        );
    }

    #[test]
    fn test_console_info_rejects_arguments() {
        let queue = TestQueue::new();
        let mut player = player(&queue, MemoryStore::default(), &PlayerConfig::default());
        let mut out = String::new();

        assert_eq!(
            player.run_console(&["info", "garbage", "more"], &mut out),
            Err(CommandError::Usage("info"))
        );
        assert_eq!(out, "-ERROR: usage: info\n");
    }

    #[test]
    fn test_console_pattern_by_name_and_index() {
        let queue = TestQueue::new();
        let mut player = player(&queue, MemoryStore::default(), &PlayerConfig::default());
        let mut out = String::new();

        player.run_console(&["pattern", "stripes"], &mut out).unwrap();
        assert_eq!(player.pattern(), PatternId::Stripes);

        out.clear();
        player.run_console(&["PATTERN", "3"], &mut out).unwrap();
        assert_eq!(player.pattern(), PatternId::Drop);
        assert!(out.starts_with("drop, 50 leds"));
        assert!(out.ends_with("+OK\n"));
    }

    #[test]
    fn test_console_setters() {
        let queue = TestQueue::new();
        let mut player = player(&queue, MemoryStore::default(), &PlayerConfig::default());
        let mut out = String::new();

        player.run_console(&["numleds", "12"], &mut out).unwrap();
        player.run_console(&["playlist", "1"], &mut out).unwrap();
        player.run_console(&["patternDuration", "2"], &mut out).unwrap();
        out.clear();
        player.run_console(&["on", "0"], &mut out).unwrap();

        assert_eq!(
            out,
            "blink, 12 leds, off, playlist on, patternDuration=5\n+OK\n"
        );
    }

    #[test]
    fn test_console_errors() {
        let queue = TestQueue::new();
        let mut player = player(&queue, MemoryStore::default(), &PlayerConfig::default());
        let mut out = String::new();

        assert_eq!(
            player.run_console(&["pattern"], &mut out),
            Err(CommandError::Usage("pattern <index|name|next>"))
        );
        assert_eq!(out, "-ERROR: usage: pattern <index|name|next>\n");

        out.clear();
        assert_eq!(
            player.run_console(&["pattern", "nope"], &mut out),
            Err(CommandError::UnknownPattern)
        );
        assert_eq!(out, "-ERROR: unknown pattern\n");
        assert_eq!(player.pattern(), PatternId::Blink);

        out.clear();
        assert_eq!(
            player.run_console(&["numLEDs", "many"], &mut out),
            Err(CommandError::InvalidArgument)
        );
        assert_eq!(out, "-ERROR: invalid argument\n");
    }

    #[test]
    fn test_parse_console() {
        assert_eq!(parse_console(&["Info"]), Ok(None));
        assert_eq!(
            parse_console(&["info", "garbage"]),
            Err(CommandError::Usage("info"))
        );
        assert_eq!(
            parse_console(&["pattern", "next"]),
            Ok(Some(Command::NextPattern))
        );
        assert_eq!(
            parse_console(&["on", "1", "2"]),
            Err(CommandError::Usage("on <0|1>"))
        );
        assert_eq!(parse_console(&["reboot"]), Err(CommandError::UnknownCommand));
        assert_eq!(parse_console(&[]), Err(CommandError::UnknownCommand));
        assert_eq!(CONSOLE_COMMANDS.len(), 6);
    }
}
