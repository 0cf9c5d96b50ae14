use record_dna::engine::codec::AnswerSheet;
use record_dna::flow::{QuizSession, Screen};
use record_dna::leads::{
    capture, export_csv, export_json, InMemoryLeadLog, LeadError, LeadStore, LeadSubmission,
};
use record_dna::quiz::ai;
use record_dna::share::{ai_share_text, share_url};

#[test]
fn full_run_from_intro_to_shareable_result() {
    let bank = ai::QuestionBank::standard().expect("standard bank loads");
    let mut session = QuizSession::open(&bank, None);
    assert_eq!(session.screen(), Screen::Intro);

    session.start();
    for _ in 0..20 {
        session.answer(3).expect("four choices per question");
    }
    assert_eq!(session.screen(), Screen::Result);

    let code = session.share_code().expect("finished run has a code");
    assert_eq!(code.len(), 20);

    let result = ai::score(&bank, session.sheet());
    let url = share_url("https://record-dna.example.com/ai-test", &code);
    let text = ai_share_text(&result, &url);
    assert!(text.contains(&format!("{}/60", result.total_score)));
    assert!(text.contains("?r="));
}

#[test]
fn share_code_arrival_skips_the_questions() {
    let bank = ai::QuestionBank::standard().expect("standard bank loads");
    let original = {
        let mut session = QuizSession::open(&bank, None);
        session.start();
        for pick in 0..20u8 {
            session.answer((pick % 4) as usize).expect("in range");
        }
        session.share_code().expect("finished run has a code")
    };

    let restored = QuizSession::open(&bank, Some(&original));
    assert_eq!(restored.screen(), Screen::Result);
    assert_eq!(restored.share_code().as_deref(), Some(original.as_str()));

    let direct = AnswerSheet::decode(&bank, &original).expect("valid code");
    assert_eq!(ai::score(&bank, restored.sheet()), ai::score(&bank, &direct));
}

#[test]
fn bad_share_codes_start_a_fresh_run() {
    let bank = ai::QuestionBank::standard().expect("standard bank loads");
    for code in ["", "short", "aaaaaaaaaaaaaaaaaaa!", "aaaaaaaaaaaaaaaaaaaaa"] {
        let session = QuizSession::open(&bank, Some(code));
        assert_eq!(session.screen(), Screen::Intro, "code {code:?}");
        assert!(session.sheet().is_empty());
    }
}

#[test]
fn gate_blocks_until_the_form_is_valid() {
    let store = InMemoryLeadLog::new();

    let denied = capture(
        &store,
        LeadSubmission {
            name: "Kim".to_string(),
            email: "kim.example.com".to_string(),
        },
        "AI Practitioner".to_string(),
        35,
        "a".repeat(20),
    );
    assert!(matches!(denied, Err(LeadError::InvalidEmail(_))));
    assert!(store.all().expect("store readable").is_empty());

    let granted = capture(
        &store,
        LeadSubmission {
            name: "Kim".to_string(),
            email: "kim@example.com".to_string(),
        },
        "AI Practitioner".to_string(),
        35,
        "a".repeat(20),
    )
    .expect("valid form unlocks");
    assert_eq!(granted.summary, "AI Practitioner");
    assert_eq!(store.all().expect("store readable").len(), 1);
}

#[test]
fn exports_round_trip_captured_leads() {
    let store = InMemoryLeadLog::new();
    capture(
        &store,
        LeadSubmission {
            name: "Lee".to_string(),
            email: "lee@example.com".to_string(),
        },
        "AI Architect".to_string(),
        58,
        "d".repeat(20),
    )
    .expect("valid form unlocks");

    let json = export_json(&store).expect("JSON export succeeds");
    let parsed: Vec<record_dna::leads::LeadRecord> =
        serde_json::from_str(&json).expect("export parses back");
    assert_eq!(parsed, store.all().expect("store readable"));

    let csv = export_csv(&store).expect("CSV export succeeds");
    assert!(csv.lines().next().expect("header row").contains("email"));
    assert!(csv.contains("lee@example.com"));
    assert!(csv.contains(&"d".repeat(20)));
}
