mod tests {
    use bias_light::color::{BLACK, Rgb};
    use bias_light::effect::{CrossfadeWalkEffect, Effect, WALK_LEDS, WALK_STAGES};
    use bias_light::{Channels, Duration};

    const DELAY: Duration = Duration::from_millis(100);
    const CEILING: u8 = 50;

    /// Render a whole pass, returning every frame
    fn run_pass(effect: &mut CrossfadeWalkEffect, leds: &mut [Rgb]) -> Vec<Vec<Rgb>> {
        let mut frames = Vec::new();
        while let Some(hold) = effect.render(leds) {
            assert_eq!(hold, DELAY);
            frames.push(leds.to_vec());
        }
        frames
    }

    #[test]
    fn test_walk_stage_table() {
        let expected = [
            (0, Channels::RED, Channels::CYAN, Channels::RED),
            (1, Channels::GREEN, Channels::RED, Channels::GREEN),
            (2, Channels::BLUE, Channels::GREEN, Channels::BLUE),
            (3, Channels::YELLOW, Channels::BLUE, Channels::RED),
            (4, Channels::PURPLE, Channels::YELLOW, Channels::BLUE),
            (5, Channels::CYAN, Channels::PURPLE, Channels::GREEN),
        ];
        for (stage, (rising, hue, from, to)) in WALK_STAGES.iter().zip(expected) {
            assert_eq!(stage.rising, rising);
            assert_eq!(stage.hue, hue);
            assert_eq!(stage.fade_from, from);
            assert_eq!(stage.fade_to, to);
            assert_eq!(stage.fading(), (rising + WALK_LEDS - 1) % WALK_LEDS);
        }
    }

    #[test]
    fn test_walk_stage_colors() {
        // LED 3 goes from yellow to blue while LED 4 ramps in purple
        let (fading, rising) = WALK_STAGES[4].colors(10, CEILING);
        assert_eq!(fading, Rgb { r: 40, g: 40, b: 10 });
        assert_eq!(rising, Rgb { r: 10, g: 0, b: 10 });
    }

    #[test]
    fn test_walk_pass_length() {
        let mut effect = CrossfadeWalkEffect::new(CEILING, DELAY, 0);
        let mut leds = [BLACK; WALK_LEDS];
        assert_eq!(run_pass(&mut effect, &mut leds).len(), WALK_LEDS * CEILING as usize);
        assert_eq!(effect.stage(), None);
    }

    #[test]
    fn test_walk_first_stage_leaves_last_led_dark() {
        let mut effect = CrossfadeWalkEffect::new(CEILING, DELAY, 0);
        let mut leds = [Rgb { r: 9, g: 9, b: 9 }; WALK_LEDS];
        let frames = run_pass(&mut effect, &mut leds);

        for (level, frame) in (1..=CEILING).zip(&frames) {
            assert_eq!(frame[0], Rgb { r: level, g: 0, b: 0 });
            assert_eq!(frame[5], BLACK);
        }
        assert_eq!(frames[49], vec![Rgb { r: 50, g: 0, b: 0 }, BLACK, BLACK, BLACK, BLACK, BLACK]);
    }

    #[test]
    fn test_walk_second_pass_fades_last_led() {
        let mut effect = CrossfadeWalkEffect::new(CEILING, DELAY, 0);
        let mut leds = [BLACK; WALK_LEDS];
        run_pass(&mut effect, &mut leds);
        assert_eq!(leds[5], Rgb { r: 0, g: 50, b: 50 });

        effect.rewind();
        effect.render(&mut leds);
        assert_eq!(leds[5], Rgb { r: 1, g: 49, b: 49 });
        assert_eq!(leds[0], Rgb { r: 1, g: 0, b: 0 });
    }

    #[test]
    fn test_walk_end_of_pass_colors() {
        let mut effect = CrossfadeWalkEffect::new(CEILING, DELAY, 0);
        let mut leds = [BLACK; WALK_LEDS];
        run_pass(&mut effect, &mut leds);

        assert_eq!(
            leds,
            [
                Rgb { r: 0, g: 50, b: 0 },
                Rgb { r: 0, g: 0, b: 50 },
                Rgb { r: 50, g: 0, b: 0 },
                Rgb { r: 0, g: 0, b: 50 },
                Rgb { r: 0, g: 50, b: 0 },
                Rgb { r: 0, g: 50, b: 50 },
            ]
        );
    }

    #[test]
    fn test_walk_starting_stage() {
        let mut effect = CrossfadeWalkEffect::new(CEILING, DELAY, 3);
        let mut leds = [BLACK; WALK_LEDS];

        assert_eq!(effect.stage(), Some(WALK_STAGES[3]));
        effect.render(&mut leds);
        assert_eq!(leds[3], Rgb { r: 1, g: 1, b: 0 });
        assert_eq!(leds[2], BLACK);

        let frames = run_pass(&mut effect, &mut leds);
        assert_eq!(frames.len() + 1, WALK_LEDS * CEILING as usize);
    }

    #[test]
    fn test_walk_repeats_every_six_leds() {
        let mut effect = CrossfadeWalkEffect::new(CEILING, DELAY, 0);
        let mut leds = [BLACK; 14];
        run_pass(&mut effect, &mut leds);

        for index in 0..leds.len() {
            assert_eq!(leds[index], leds[index % WALK_LEDS]);
        }
    }

    #[test]
    fn test_walk_stays_under_ceiling() {
        let mut effect = CrossfadeWalkEffect::new(CEILING, DELAY, 0);
        let mut leds = [BLACK; WALK_LEDS];
        run_pass(&mut effect, &mut leds);
        effect.rewind();
        for frame in run_pass(&mut effect, &mut leds) {
            for led in frame {
                assert!(led.r <= CEILING && led.g <= CEILING && led.b <= CEILING);
            }
        }
    }
}
