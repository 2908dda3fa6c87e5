use std::time::Duration;

use sheets::{
    ChallengeRecord, GroupRecord, InMemorySheets, SheetsConfig, SourceError, Sources,
    StudentRecord,
};
use synchrony_core::model::{Email, GroupId, SessionId};

fn unreachable_config() -> SheetsConfig {
    SheetsConfig {
        sheet_id: "offline".into(),
        // Port 9 (discard) is closed on any sane test host.
        base_url: "http://127.0.0.1:9/spreadsheets/d".into(),
        timeout: Duration::from_secs(2),
    }
}

#[tokio::test]
async fn unreachable_sheet_reports_source_error() {
    let sources = Sources::google(&unreachable_config()).expect("build sources");
    let email = Email::parse("jane.doe@uni.edu").unwrap();

    let student = sources.students.find_student(&email).await;
    assert!(matches!(student, Err(SourceError::Http(_))), "{student:?}");

    let group = sources.groups.find_group(&GroupId::new("G001")).await;
    assert!(matches!(group, Err(SourceError::Http(_))), "{group:?}");

    let challenges = sources
        .challenges
        .challenges_for_session(&SessionId::new("S1"))
        .await;
    assert!(matches!(challenges, Err(SourceError::Http(_))), "{challenges:?}");
}

#[tokio::test]
async fn in_memory_sources_filter_by_key() {
    let sheets = InMemorySheets::new();
    sheets
        .add_student(StudentRecord::new("ana@uni.edu", Some("Ana Silva"), Some("G5")))
        .unwrap();
    sheets
        .add_group(GroupRecord::new("G5", "Ana Silva, Ben Ode", "Heaps, Graphs"))
        .unwrap();
    for (number, session) in [("1", "S100"), ("2", "S100"), ("1", "S200")] {
        sheets
            .add_challenge(ChallengeRecord {
                session_id: session.into(),
                challenge_number: Some(number.into()),
                description: Some(format!("challenge {number} for {session}")),
                topics_involved: Some("Heaps".into()),
                hints_json: Some(r#"["h1","h2","h3"]"#.into()),
            })
            .unwrap();
    }
    let sources = Sources::from_sheets(sheets);

    let student = sources
        .students
        .find_student(&Email::parse("ANA@uni.edu").unwrap())
        .await
        .unwrap()
        .expect("student row");
    assert_eq!(student.group(), Some(GroupId::new("G5")));

    let rows = sources
        .challenges
        .challenges_for_session(&SessionId::new("S100"))
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    let numbers: Vec<u32> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| row.to_challenge(i).number())
        .collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[tokio::test]
async fn empty_sources_miss_everything() {
    let sources = Sources::in_memory();
    let email = Email::parse("nobody@uni.edu").unwrap();
    assert!(sources.students.find_student(&email).await.unwrap().is_none());
    assert!(
        sources
            .groups
            .find_group(&GroupId::new("G001"))
            .await
            .unwrap()
            .is_none()
    );
}
