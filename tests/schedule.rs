//! End-to-end scheduling scenarios through the public API and JSON format.

use surgiplan::{
    classify_case, schedule, PendingCase, PriorityTag, ScheduleEngine, ScheduleRequest,
    ScheduledCase, SurgerySuggestion,
};

fn find<'a>(suggestions: &'a [SurgerySuggestion], id: &str) -> &'a SurgerySuggestion {
    suggestions
        .iter()
        .find(|s| s.id == id)
        .unwrap_or_else(|| panic!("no suggestion for {id}"))
}

#[test]
fn hip_fracture_example() {
    let case = classify_case(&PendingCase::new("p1", "Gãy cổ xương đùi bên trái", 68), 0);
    assert_eq!(case.procedure_label, "PT Thay khớp háng");
    assert_eq!(case.priority, PriorityTag::ThaOrArthroscopy);
    assert_eq!(case.primary_rooms, vec!["7"]);
    assert_eq!(case.duration_minutes, 90);

    let suggestions = schedule(&[case.case], &[]);
    assert_eq!(suggestions[0].surgeon_name, "TS Minh");
}

#[test]
fn infection_example() {
    let case = classify_case(&PendingCase::new("p2", "Viêm xương cẳng chân phải", 40), 0);
    assert_eq!(case.procedure_label, "PT Nạo viêm cẳng chân P");
    assert_eq!(case.priority, PriorityTag::Infection);
    assert_eq!(case.primary_rooms, vec!["1"]);
    assert_eq!(case.duration_minutes, 30);
}

#[test]
fn first_case_of_the_day_opens_the_morning() {
    let suggestions = schedule(&[PendingCase::new("p1", "Đứt DCCT gối trái", 30)], &[]);
    assert_eq!(suggestions[0].operating_room, "7");
    assert_eq!(suggestions[0].surgery_time, "08:00");
}

#[test]
fn second_long_case_follows_the_first() {
    let booked = [ScheduledCase::new("s1", "7", "08:00").with_label("PT Thay khớp háng")];
    let suggestions = schedule(&[PendingCase::new("p1", "Đứt DCCT gối trái", 30)], &booked);
    assert_eq!(suggestions[0].operating_room, "7");
    assert_eq!(suggestions[0].surgery_time, "09:30");
}

#[test]
fn two_septic_cases_share_room_one() {
    let pending = [
        PendingCase::new("a", "Viêm xương cẳng chân phải", 40),
        PendingCase::new("b", "Nhiễm trùng vết mổ cẳng tay trái", 64),
    ];
    let suggestions = schedule(&pending, &[]);
    assert_eq!(find(&suggestions, "a").operating_room, "1");
    assert_eq!(find(&suggestions, "a").surgery_time, "08:00");
    assert_eq!(find(&suggestions, "b").operating_room, "1");
    assert_eq!(find(&suggestions, "b").surgery_time, "08:30");
}

#[test]
fn arthroplasty_spills_into_fallback_room_when_room_seven_is_full() {
    let booked: Vec<ScheduledCase> = ["08:00", "09:30", "13:30", "15:00"]
        .into_iter()
        .map(|time| {
            ScheduledCase::new(format!("s-{time}"), "7", time).with_label("PT Thay khớp háng")
        })
        .collect();
    let suggestions = schedule(&[PendingCase::new("p1", "Gãy cổ xương đùi phải", 81)], &booked);
    assert_eq!(suggestions[0].operating_room, "8");
    assert_eq!(suggestions[0].surgery_time, "08:00");
}

#[test]
fn tumors_overflow_to_rooms_nine_and_ten() {
    let mut booked = Vec::new();
    for room in ["7", "8"] {
        for (time, label) in [
            ("08:00", "PT KHX"),
            ("09:30", "PT KHX"),
            ("11:00", "PT Tháo phương tiện"),
            ("13:30", "PT KHX"),
            ("15:00", "PT KHX"),
            ("16:30", "PT Tháo phương tiện"),
        ] {
            booked.push(ScheduledCase::new(format!("{room}-{time}"), room, time).with_label(label));
        }
    }
    let pending = [
        PendingCase::new("t1", "U mỡ vùng cánh tay phải", 50),
        PendingCase::new("t2", "Nang bao hoạt dịch cổ tay trái", 27),
    ];
    let suggestions = schedule(&pending, &booked);
    assert_eq!(find(&suggestions, "t1").operating_room, "9");
    assert_eq!(find(&suggestions, "t1").surgery_time, "08:00");
    // Room 10 is still empty, so it offers the earlier end.
    assert_eq!(find(&suggestions, "t2").operating_room, "10");
    assert_eq!(find(&suggestions, "t2").surgery_time, "08:00");
}

#[test]
fn overflowing_minor_cases_are_left_unplaced() {
    let pending: Vec<PendingCase> = (0..30)
        .map(|i| PendingCase::new(format!("m{i}"), "Ngón tay cò súng", 50))
        .collect();
    let report = ScheduleEngine::new().run(&pending, &[]);
    // Rooms 7 and 8 each hold seven 30-minute cases per session.
    assert_eq!(report.placed, 28);
    assert_eq!(report.unplaced, 2);
    assert_eq!(report.suggestions.len(), 30);
    assert!(report
        .suggestions
        .iter()
        .filter(|s| !s.is_placed())
        .all(|s| s.surgery_time.is_empty() && s.procedure_label == "Phẫu thuật"));
}

#[test]
fn json_request_round_trip_through_engine() {
    let json = r#"{
        "pending": [
            { "id": "bn-1", "diagnosis": "Gãy kín thân xương đùi trái", "age": 72 },
            { "id": "bn-2", "diagnosis": "Áp xe cẳng chân phải" }
        ],
        "alreadyScheduled": [
            { "id": "old-1", "operatingRoom": "7", "surgeryTime": "08:00",
              "procedureLabel": "PT KHX cẳng chân P" },
            { "id": "old-2", "operatingRoom": "8", "surgeryTime": "08:00",
              "diagnosis": "Gãy xương bánh chè phải" },
            { "id": "old-3", "operatingRoom": "1", "surgeryTime": "tám giờ" }
        ]
    }"#;
    let request: ScheduleRequest = serde_json::from_str(json).unwrap();
    let suggestions = schedule(&request.pending, &request.already_scheduled);

    let output = serde_json::to_value(&suggestions).unwrap();
    assert_eq!(
        output,
        serde_json::json!([
            {
                "id": "bn-2",
                "procedureLabel": "PT Nạo viêm cẳng chân P",
                "operatingRoom": "1",
                "surgeryTime": "08:00",
                "surgeonName": ""
            },
            {
                "id": "bn-1",
                "procedureLabel": "PT KHX đùi T",
                "operatingRoom": "7",
                "surgeryTime": "09:30",
                "surgeonName": ""
            }
        ])
    );
}

#[test]
fn repeated_runs_are_identical() {
    let pending = [
        PendingCase::new("a", "Gãy cổ xương đùi phải", 80),
        PendingCase::new("b", "Gãy xương cẳng tay trái", 6),
        PendingCase::new("c", "Còn nẹp vít cẳng chân phải", 30),
        PendingCase::new("d", "U mỡ lưng", 44),
    ];
    let booked = [ScheduledCase::new("s", "8", "08:30").with_label("PT KHX")];
    assert_eq!(schedule(&pending, &booked), schedule(&pending, &booked));
}
