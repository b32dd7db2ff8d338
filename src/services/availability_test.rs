#[cfg(test)]
mod availability_tests {
    use crate::models::common::SelectionParams;
    use crate::models::slot::EndTimeState;
    use crate::services::availability::{
        generate_end_options, generate_start_options, generate_time_options, is_available,
        overlaps, parse_grid_hour, to_minutes, END_AWAITING_START, END_NONE_AVAILABLE,
    };
    use crate::tests::fixtures::reservation;

    fn selection(date: &str, room: &str, start: Option<&str>) -> SelectionParams {
        SelectionParams {
            date: Some(date.to_string()),
            room: Some(room.to_string()),
            start: start.map(str::to_string),
        }
    }

    fn values(options: &[crate::models::slot::TimeOption]) -> Vec<&str> {
        options.iter().map(|option| option.value.as_str()).collect()
    }

    #[test]
    fn test_to_minutes() {
        assert_eq!(to_minutes("09:00"), 540);
        assert_eq!(to_minutes("9:30"), 570);
        assert_eq!(to_minutes("18:00"), 1080);
    }

    #[test]
    fn test_oversized_stored_times_saturate() {
        assert_eq!(to_minutes("99999999:00"), u32::MAX);

        // A corrupt row still blocks the rest of its day without panicking
        let store = vec![reservation("2024-01-01", "A", "10:00", "99999999:00")];
        assert!(is_available(&store, Some("2024-01-01"), Some("A"), "09:00", "10:00"));
        assert!(!is_available(&store, Some("2024-01-01"), Some("A"), "17:00", "18:00"));
    }

    #[test]
    fn test_parse_grid_hour() {
        assert_eq!(parse_grid_hour("09:00"), Some(9));
        assert_eq!(parse_grid_hour("17:00"), Some(17));
        assert_eq!(parse_grid_hour("9:00"), None);
        assert_eq!(parse_grid_hour("09:30"), None);
        assert_eq!(parse_grid_hour("25:00"), None);
        assert_eq!(parse_grid_hour("nine"), None);
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let intervals = [(540, 600), (600, 660), (540, 720), (570, 630), (660, 720)];
        for &(a_start, a_end) in &intervals {
            for &(b_start, b_end) in &intervals {
                assert_eq!(
                    overlaps(a_start, a_end, b_start, b_end),
                    overlaps(b_start, b_end, a_start, a_end),
                    "[{a_start},{a_end}) vs [{b_start},{b_end})"
                );
            }
        }
    }

    #[test]
    fn test_abutting_intervals_do_not_conflict() {
        let store = vec![reservation("2024-01-01", "A", "09:00", "10:00")];
        assert!(is_available(&store, Some("2024-01-01"), Some("A"), "10:00", "11:00"));

        let store = vec![reservation("2024-01-01", "A", "10:00", "11:00")];
        assert!(is_available(&store, Some("2024-01-01"), Some("A"), "09:00", "10:00"));
    }

    #[test]
    fn test_containment_conflicts() {
        let store = vec![reservation("2024-01-01", "A", "09:00", "12:00")];
        assert!(!is_available(&store, Some("2024-01-01"), Some("A"), "10:00", "11:00"));

        let store = vec![reservation("2024-01-01", "A", "10:00", "11:00")];
        assert!(!is_available(&store, Some("2024-01-01"), Some("A"), "09:00", "12:00"));
    }

    #[test]
    fn test_other_rooms_and_dates_are_independent() {
        let store = vec![reservation("2024-01-01", "A", "10:00", "11:00")];
        assert!(is_available(&store, Some("2024-01-01"), Some("B"), "10:00", "11:00"));
        assert!(is_available(&store, Some("2024-01-02"), Some("A"), "10:00", "11:00"));
    }

    #[test]
    fn test_missing_date_or_room_is_available() {
        let store = vec![reservation("2024-01-01", "A", "10:00", "11:00")];
        assert!(is_available(&store, None, Some("A"), "10:00", "11:00"));
        assert!(is_available(&store, Some("2024-01-01"), None, "10:00", "11:00"));
    }

    #[test]
    fn test_start_options_cover_full_grid() {
        let store = vec![
            reservation("2024-01-01", "A", "09:00", "12:00"),
            reservation("2024-01-01", "A", "13:00", "18:00"),
        ];
        let start = generate_start_options(&store, Some("2024-01-01"), Some("A"));

        assert_eq!(
            values(&start.options),
            vec!["09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00"]
        );
        let available: Vec<&str> = start
            .options
            .iter()
            .filter(|option| option.available)
            .map(|option| option.value.as_str())
            .collect();
        assert_eq!(available, vec!["12:00"]);
        assert_eq!(start.options[0].label, "09:00 (예약 불가)");
        assert_eq!(start.options[3].label, "12:00 (예약 가능)");
    }

    #[test]
    fn test_start_options_need_date_and_room() {
        let start = generate_start_options(&[], None, Some("A"));
        assert!(start.options.is_empty());

        let start = generate_start_options(&[], Some("2024-01-01"), None);
        assert!(start.options.is_empty());
    }

    #[test]
    fn test_end_options_bounds() {
        let end = generate_end_options(&[], Some("2024-01-01"), Some("A"), Some("17:00"));
        assert_eq!(values(&end.options), vec!["18:00"]);

        let end = generate_end_options(&[], Some("2024-01-01"), Some("A"), Some("09:00"));
        assert_eq!(end.options.len(), 9);
        assert_eq!(end.options.first().unwrap().value, "10:00");
        assert_eq!(end.options.last().unwrap().value, "18:00");
        assert!(end.can_submit);
        assert_eq!(end.state, EndTimeState::Selectable);
    }

    #[test]
    fn test_end_options_without_start() {
        let end = generate_end_options(&[], Some("2024-01-01"), Some("A"), None);
        assert_eq!(end.state, EndTimeState::AwaitingStart);
        assert_eq!(end.placeholder, END_AWAITING_START);
        assert!(end.options.is_empty());
        assert!(!end.can_submit);
    }

    #[test]
    fn test_end_options_use_chosen_start() {
        // 09:00-10:00 is free, anything past 10:00 runs into the 10:00 booking
        let store = vec![reservation("2024-01-01", "A", "10:00", "11:00")];
        let end = generate_end_options(&store, Some("2024-01-01"), Some("A"), Some("09:00"));

        assert!(end.options[0].available);
        assert!(end.options[1..].iter().all(|option| !option.available));
        assert_eq!(end.available_count(), 1);
        assert!(end.can_submit);
    }

    #[test]
    fn test_submit_disabled_when_no_end_available() {
        // A 16:00 start that collides with a booking covering 16:00-18:00
        let store = vec![reservation("2024-01-01", "A", "16:00", "18:00")];
        let end = generate_end_options(&store, Some("2024-01-01"), Some("A"), Some("16:00"));

        assert_eq!(values(&end.options), vec!["17:00", "18:00"]);
        assert_eq!(end.available_count(), 0);
        assert!(!end.can_submit);
        assert_eq!(end.state, EndTimeState::NoneAvailable);
        assert_eq!(end.placeholder, END_NONE_AVAILABLE);
    }

    #[test]
    fn test_cascade_marks_booked_hour() {
        let store = vec![reservation("2024-01-01", "A", "10:00", "11:00")];

        let options = generate_time_options(&store, &selection("2024-01-01", "A", None));
        let ten = options
            .start
            .options
            .iter()
            .find(|option| option.value == "10:00")
            .unwrap();
        assert!(!ten.available);
        assert_eq!(options.end.state, EndTimeState::AwaitingStart);

        let options = generate_time_options(&store, &selection("2024-01-01", "A", Some("09:00")));
        assert_eq!(options.selected_start.as_deref(), Some("09:00"));
        let eleven = options
            .end
            .options
            .iter()
            .find(|option| option.value == "11:00")
            .unwrap();
        assert!(!eleven.available);
        assert!(options.end.options[0].available);
    }

    #[test]
    fn test_cascade_drops_unavailable_start() {
        let store = vec![reservation("2024-01-01", "A", "10:00", "11:00")];
        let options = generate_time_options(&store, &selection("2024-01-01", "A", Some("10:00")));

        assert_eq!(options.selected_start, None);
        assert_eq!(options.end.state, EndTimeState::AwaitingStart);
        assert!(!options.end.can_submit);
    }

    #[test]
    fn test_cascade_treats_blank_selection_as_unset() {
        let params = SelectionParams {
            date: Some("".to_string()),
            room: Some("A".to_string()),
            start: Some("09:00".to_string()),
        };
        let options = generate_time_options(&[], &params);

        assert!(options.start.options.is_empty());
        assert_eq!(options.date, None);
        assert_eq!(options.end.state, EndTimeState::AwaitingStart);
    }
}
