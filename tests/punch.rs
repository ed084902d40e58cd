#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use kekatime::libs::punch::{normalize, PunchEvent, PunchKind, PunchLog, PunchRecord, PunchStatus, UNKNOWN_PREMISE};
    use kekatime::libs::time::ClockFormat;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(PunchStatus::from(0), PunchStatus::In);
        assert_eq!(PunchStatus::from(1), PunchStatus::Out);
        assert_eq!(PunchStatus::from(4), PunchStatus::Missing);
        assert_eq!(PunchStatus::from(7), PunchStatus::Unknown(7));
    }

    #[test]
    fn test_normalize_drops_deleted_and_non_punches() {
        let log = vec![
            PunchRecord::new(at(9, 0), PunchStatus::In),
            PunchRecord::new(at(10, 0), PunchStatus::Out).deleted(),
            PunchRecord::new(at(11, 0), PunchStatus::Missing),
            PunchRecord::new(at(12, 0), PunchStatus::Unknown(9)),
            PunchRecord::new(at(13, 0), PunchStatus::Out),
        ];

        assert_eq!(
            log.normalize(),
            vec![PunchEvent::punch_in(at(9, 0)), PunchEvent::punch_out(at(13, 0))]
        );
    }

    #[test]
    fn test_normalize_sorts_by_time() {
        let log = vec![
            PunchRecord::new(at(13, 0), PunchStatus::Out),
            PunchRecord::new(at(9, 0), PunchStatus::In),
        ];
        let times: Vec<_> = normalize(&log).iter().map(|e| e.time).collect();
        assert_eq!(times, vec![at(9, 0), at(13, 0)]);
    }

    #[test]
    fn test_normalize_keeps_input_order_on_equal_timestamps() {
        let log = vec![
            PunchRecord::new(at(12, 0), PunchStatus::Out),
            PunchRecord::new(at(9, 0), PunchStatus::In),
            PunchRecord::new(at(12, 0), PunchStatus::In),
        ];
        let kinds: Vec<_> = log.normalize().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![PunchKind::In, PunchKind::Out, PunchKind::In]);
    }

    #[test]
    fn test_group_by_premise() {
        let log = vec![
            PunchRecord::new(at(14, 0), PunchStatus::In).at_premise("Branch"),
            PunchRecord::new(at(9, 0), PunchStatus::In).at_premise("HQ"),
            PunchRecord::new(at(12, 0), PunchStatus::Out).at_premise("HQ"),
            PunchRecord::new(at(15, 0), PunchStatus::Out),
            PunchRecord::new(at(16, 0), PunchStatus::In).at_premise("HQ").deleted(),
        ];

        let groups = log.by_premise();
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Branch", "HQ", UNKNOWN_PREMISE]);
        assert_eq!(groups[1].records.len(), 2);
        assert_eq!(groups[1].records[0].timestamp, at(9, 0));
    }

    #[test]
    fn test_premise_rows_pair_records() {
        let log = vec![
            PunchRecord::new(at(9, 0), PunchStatus::In),
            PunchRecord::new(at(12, 0), PunchStatus::Out),
            PunchRecord::new(at(13, 0), PunchStatus::In),
        ];
        let groups = log.by_premise();
        let rows = groups[0].rows();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].1.is_some());
        assert!(rows[1].1.is_none());
    }

    #[test]
    fn test_cells() {
        let punch_in = PunchRecord::new(at(9, 5), PunchStatus::In);
        assert_eq!(punch_in.cell(ClockFormat::H12), "→ 9:05:00 AM IN");
        assert_eq!(punch_in.cell(ClockFormat::H24), "→ 09:05:00 IN");

        let missing = PunchRecord::new(at(9, 5), PunchStatus::Missing);
        assert_eq!(missing.cell(ClockFormat::H12), "• MISSING");
    }
}
