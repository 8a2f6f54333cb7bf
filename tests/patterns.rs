mod tests {
    use embassy_time::Duration;
    use myrtio_strip_player::{
        Frame, LayoutPreset, PatternId, PatternSlot, Rgb, StripLayout,
        color::{BLACK, is_black},
        pattern::{DROP_FILL_HOLD, STATIC_FRAME},
    };

    const MARKER: Rgb = Rgb { r: 1, g: 2, b: 3 };

    fn render(
        slot: &mut PatternSlot,
        leds: &mut [Rgb],
        preset: LayoutPreset,
        first_call: bool,
    ) -> Duration {
        let layout = StripLayout::new(preset, leds.len());
        let mut brightness = 200;
        let mut frame = Frame::new(leds, layout, &mut brightness, 200, 42);
        slot.render(&mut frame, first_call)
    }

    fn lit(leds: &[Rgb]) -> Vec<usize> {
        leds.iter()
            .enumerate()
            .filter(|(_, led)| !is_black(**led))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_double_first_call_initializes_every_pixel() {
        for preset in [LayoutPreset::Linear, LayoutPreset::Tree] {
            for id in PatternId::ALL {
                let mut leds = [MARKER; 53];
                let mut slot = id.to_slot();
                render(&mut slot, &mut leds, preset, true);
                render(&mut slot, &mut leds, preset, true);

                assert!(
                    leds.iter().all(|led| *led != MARKER),
                    "{id} left stale pixels on {preset:?}"
                );
            }
        }
    }

    #[test]
    fn test_patterns_survive_tiny_strips() {
        for count in 0..4 {
            for id in PatternId::ALL {
                let mut leds = vec![BLACK; count];
                let mut slot = id.to_slot();
                render(&mut slot, &mut leds, LayoutPreset::Tree, true);
                for _ in 0..8 {
                    render(&mut slot, &mut leds, LayoutPreset::Tree, false);
                }
            }
        }
    }

    #[test]
    fn test_static_patterns() {
        for id in [PatternId::Outline, PatternId::Tree] {
            let mut leds = [BLACK; 10];
            let mut slot = id.to_slot();
            assert_eq!(
                render(&mut slot, &mut leds, LayoutPreset::Linear, true),
                STATIC_FRAME
            );
        }
    }

    #[test]
    fn test_chase_erases_previous_pixel() {
        let mut leds = [BLACK; 5];
        let mut slot = PatternId::Chase.to_slot();

        render(&mut slot, &mut leds, LayoutPreset::Linear, true);
        assert_eq!(lit(&leds), [0]);
        render(&mut slot, &mut leds, LayoutPreset::Linear, false);
        assert_eq!(lit(&leds), [1]);

        for _ in 0..4 {
            render(&mut slot, &mut leds, LayoutPreset::Linear, false);
        }
        assert_eq!(lit(&leds), [0]);
    }

    #[test]
    fn test_double_chase_mirrors_along_strip() {
        let mut leds = [BLACK; 6];
        let mut slot = PatternId::DoubleChase.to_slot();

        render(&mut slot, &mut leds, LayoutPreset::Linear, true);
        assert_eq!(lit(&leds), [0, 5]);
        render(&mut slot, &mut leds, LayoutPreset::Linear, false);
        assert_eq!(lit(&leds), [1, 4]);
    }

    #[test]
    fn test_double_chase_stays_on_tree_edge() {
        let edge: Vec<usize> = StripLayout::new(LayoutPreset::Tree, 53).edge().iter().collect();
        let mut leds = [BLACK; 53];
        let mut slot = PatternId::DoubleChase.to_slot();

        render(&mut slot, &mut leds, LayoutPreset::Tree, true);
        for _ in 0..edge.len() + 2 {
            let pixels = lit(&leds);
            assert!(!pixels.is_empty());
            assert!(
                pixels.iter().all(|index| edge.contains(index)),
                "lit off the edge: {pixels:?}"
            );
            render(&mut slot, &mut leds, LayoutPreset::Tree, false);
        }

        let pixels = lit(&leds);
        assert_eq!(pixels.len(), 2);
        assert!(pixels.iter().all(|index| edge.contains(index)));
    }

    #[test]
    fn test_drop_fill_holds_full_strip() {
        let mut leds = [BLACK; 10];
        let mut slot = PatternId::DropFill.to_slot();

        let delay = render(&mut slot, &mut leds, LayoutPreset::Linear, true);
        assert_eq!(delay, Duration::from_millis(100));
        assert_eq!(lit(&leds), [4, 5]);

        for _ in 0..3 {
            render(&mut slot, &mut leds, LayoutPreset::Linear, false);
        }
        let delay = render(&mut slot, &mut leds, LayoutPreset::Linear, false);
        assert_eq!(delay, DROP_FILL_HOLD);
        assert_eq!(lit(&leds).len(), 10);

        render(&mut slot, &mut leds, LayoutPreset::Linear, false);
        assert_eq!(lit(&leds), [4, 5]);
    }

    #[test]
    fn test_red_blue_bounce_turns_at_the_ends() {
        let mut leds = [BLACK; 4];
        let mut slot = PatternId::RedBlueBounce.to_slot();
        let blue = |leds: &[Rgb]| leds.iter().position(|led| led.b == 255 && led.r == 0);

        render(&mut slot, &mut leds, LayoutPreset::Linear, true);
        let mut positions = vec![blue(&leds)];
        for _ in 0..6 {
            render(&mut slot, &mut leds, LayoutPreset::Linear, false);
            positions.push(blue(&leds));
        }

        assert_eq!(positions, [0, 1, 2, 3, 2, 1, 0].map(Some));
    }

    #[test]
    fn test_tree_steps_light_one_tier_per_step() {
        let mut leds = [BLACK; 9];
        let mut slot = PatternId::TreeSteps.to_slot();

        let delay = render(&mut slot, &mut leds, LayoutPreset::Linear, true);
        assert_eq!(delay, Duration::from_millis(1000));
        assert_eq!(lit(&leds), [6, 7, 8]);

        render(&mut slot, &mut leds, LayoutPreset::Linear, false);
        assert_eq!(lit(&leds), [3, 4, 5, 6, 7, 8]);

        render(&mut slot, &mut leds, LayoutPreset::Linear, false);
        assert_eq!(lit(&leds).len(), 9);

        render(&mut slot, &mut leds, LayoutPreset::Linear, false);
        assert_eq!(lit(&leds), [6, 7, 8]);
    }

    #[test]
    fn test_glow_drives_brightness() {
        let mut leds = [BLACK; 3];
        let layout = StripLayout::new(LayoutPreset::Linear, 3);
        let mut brightness = 200;
        let mut slot = PatternId::Glow.to_slot();
        assert!(slot.controls_brightness());

        let mut frame = Frame::new(&mut leds, layout, &mut brightness, 10, 0);
        slot.render(&mut frame, true);
        slot.render(&mut frame, false);
        assert_eq!(frame.brightness(), 10);
        slot.render(&mut frame, false);
        assert_eq!(frame.brightness(), 5);
    }

    #[test]
    fn test_slot_reports_its_id() {
        for id in PatternId::ALL {
            assert_eq!(id.to_slot().id(), id);
        }
    }
}
