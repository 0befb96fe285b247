mod tests {
    use embassy_time::Duration;
    use panel_traffic_light::color::BLACK;
    use panel_traffic_light::driver::{
        CycleDriver, FRAME_TRANSITION_TICKS, FrameBufferTooSmall, PanelFrame,
    };
    use panel_traffic_light::layout::{
        FrameSlice, Layout, Orientation, Panel, PanelId, Point,
    };
    use panel_traffic_light::{ColorSlot, Palette, Rgb, Selection, select_panels};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const YELLOW: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 0,
    };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };

    /// One panel per entry, stacked by position, grouped into slices
    fn setup(groups: &[&[PanelId]]) -> (Vec<FrameSlice>, Selection) {
        let shapes: Vec<(PanelId, Point)> = groups
            .iter()
            .flat_map(|ids| ids.iter())
            .map(|id| (*id, Point::new(0.0, f32::from(*id))))
            .collect();
        let panels: Vec<Panel> =
            shapes.iter().map(|(id, p)| Panel::new(*id, p)).collect();
        let layout = Layout::new(&panels, Orientation::default());
        let slices: Vec<FrameSlice> = groups
            .iter()
            .map(|ids| FrameSlice::from_ids(ids).unwrap())
            .collect();
        let selection = select_panels(&layout, &slices, Palette::default()).unwrap();
        (slices, selection)
    }

    fn lit(frames: &[PanelFrame]) -> Vec<(PanelId, Rgb)> {
        frames
            .iter()
            .filter(|frame| frame.color != BLACK)
            .map(|frame| (frame.panel_id, frame.color))
            .collect()
    }

    #[test]
    fn test_single_panel_cycle() {
        let (slices, selection) = setup(&[&[10], &[20], &[30], &[40], &[50]]);
        let mut driver = CycleDriver::new(Duration::from_millis(50));
        let mut frames = [PanelFrame::default(); 5];

        let expected = [
            (RED, 50),
            (YELLOW, 20),
            (GREEN, 50),
            (RED, 50),
        ];
        for (color, delay) in expected {
            let result = driver.tick(&slices, &selection, &mut frames).unwrap();
            assert_eq!(result.frame_count, 5);
            assert_eq!(result.sleep_duration, Duration::from_millis(delay));
            assert_eq!(lit(&frames), vec![(30, color)]);
        }

        let ids: Vec<PanelId> = frames.iter().map(|frame| frame.panel_id).collect();
        assert_eq!(ids, vec![10, 20, 30, 40, 50]);
        assert!(
            frames
                .iter()
                .all(|frame| frame.transition_ticks == FRAME_TRANSITION_TICKS)
        );
    }

    #[test]
    fn test_three_panel_cycle() {
        let (slices, selection) = setup(&[&[1], &[2, 3, 4], &[5, 6]]);
        let mut driver = CycleDriver::default();
        let mut frames = [PanelFrame::default(); 6];

        let expected = [
            (ColorSlot::Red, 4, RED),
            (ColorSlot::Yellow, 3, YELLOW),
            (ColorSlot::Green, 2, GREEN),
            (ColorSlot::Red, 4, RED),
            (ColorSlot::Yellow, 3, YELLOW),
        ];
        for (slot, panel, color) in expected {
            assert_eq!(driver.current(), slot);
            let result = driver.tick(&slices, &selection, &mut frames).unwrap();
            assert_eq!(result.frame_count, 6);
            assert_eq!(result.sleep_duration, driver.dwell_time(slot));
            assert_eq!(lit(&frames), vec![(panel, color)]);
        }
    }

    #[test]
    fn test_two_panel_cycle_skips_yellow() {
        let (slices, selection) = setup(&[&[1], &[7, 8], &[9]]);
        let mut driver = CycleDriver::new(Duration::from_millis(100));
        let mut frames = [PanelFrame::default(); 4];

        let expected = [(ColorSlot::Red, 8, RED), (ColorSlot::Green, 7, GREEN)];
        for _ in 0..3 {
            for (slot, panel, color) in expected {
                assert_eq!(driver.current(), slot);
                let result = driver.tick(&slices, &selection, &mut frames).unwrap();
                assert_eq!(result.frame_count, 4);
                assert_eq!(result.sleep_duration, Duration::from_millis(100));
                assert_eq!(lit(&frames), vec![(panel, color)]);
            }
        }
    }

    #[test]
    fn test_dwell_times() {
        let driver = CycleDriver::new(Duration::from_millis(15));
        assert_eq!(driver.dwell_time(ColorSlot::Red), Duration::from_millis(15));
        assert_eq!(driver.dwell_time(ColorSlot::Yellow), Duration::from_millis(6));
        assert_eq!(driver.dwell_time(ColorSlot::Green), Duration::from_millis(15));

        let driver = CycleDriver::default();
        assert_eq!(driver.transition_time(), Duration::from_millis(50));
        assert_eq!(driver.dwell_time(ColorSlot::Yellow), Duration::from_millis(20));
    }

    #[test]
    fn test_frames_past_panel_count_untouched() {
        let (slices, selection) = setup(&[&[1], &[2], &[3]]);
        let mut driver = CycleDriver::default();
        let marker = PanelFrame {
            panel_id: 999,
            color: Rgb::new(1, 2, 3),
            transition_ticks: 42,
        };
        let mut frames = [marker; 8];

        let result = driver.tick(&slices, &selection, &mut frames).unwrap();
        assert_eq!(result.frame_count, 3);
        assert!(frames[3..].iter().all(|frame| *frame == marker));
    }

    #[test]
    fn test_small_buffer_is_rejected() {
        let (slices, selection) = setup(&[&[1], &[2, 3, 4]]);
        let mut driver = CycleDriver::default();
        let mut frames = [PanelFrame::default(); 3];

        assert_eq!(
            driver.tick(&slices, &selection, &mut frames),
            Err(FrameBufferTooSmall {
                required: 4,
                provided: 3
            })
        );
        assert_eq!(driver.current(), ColorSlot::Red);
        assert!(frames.iter().all(|frame| *frame == PanelFrame::default()));
    }
}
