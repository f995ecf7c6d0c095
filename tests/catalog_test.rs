//! Full-catalog integration tests: fixed order, idempotence, and the
//! end-to-end audit scenarios.

use seo_audit::{audit, AuditInput, CheckResult, CheckStatus, RULE_IDS};

fn status_of(checks: &[CheckResult], id: &str) -> CheckStatus {
    checks
        .iter()
        .find(|c| c.id == id)
        .unwrap_or_else(|| panic!("rule {id} missing from results"))
        .status
}

/// A fully optimized Vietnamese article for the keyword "máy lọc nước":
/// keyword-led title, 250-char meta with two mentions, 1000+ words with
/// in-range density, two keyword-bearing H2s each followed by an alt-tagged
/// image, keyword in the opening and closing windows, one internal link
/// opening a new tab, and three reference links.
fn optimized_input() -> AuditInput {
    let kw = "máy lọc nước";
    let filler = |n: usize| vec!["nội"; n].join(" ");

    // 12 keyword chars on each side of 224 padding chars: 250 total
    let meta = format!("{kw} {} {kw}", "x".repeat(224));

    let p_open = format!("<p>{kw} {}</p>", filler(97));
    let h2_a = "<h2>Máy lọc nước tổng quan</h2>";
    let img_a = r#"<img src="may-loc-nuoc.jpg" alt="máy lọc nước">"#;
    let p_variants = format!("<p>{}</p>", vec!["máy lọc nước tốt"; 9].join(" "));
    let p_fill = format!("<p>{}</p>", filler(800));
    let h2_b = "<h2>Máy lọc nước giá rẻ</h2>";
    let img_b = r#"<img src="bo-loc.jpg" alt="bộ lọc thay thế">"#;
    let p_links = "<p>Xem <a href=\"/bao-gia\" target=\"_blank\">báo giá</a> và \
                   <a href=\"https://vi.wikipedia.org/wiki/A\" target=\"_blank\">nguồn</a> \
                   <a href=\"https://suckhoedoisong.vn\" target=\"_blank\">tham khảo</a>.</p>";
    let p_close = format!("<p>{} {kw}</p>", filler(96));

    let content = [
        p_open.as_str(),
        h2_a,
        img_a,
        p_variants.as_str(),
        p_fill.as_str(),
        h2_b,
        img_b,
        p_links,
        p_close.as_str(),
    ]
    .join("\n");

    AuditInput {
        main_keyword: kw.to_string(),
        url: "example.com/may-loc-nuoc/ion-kiem".to_string(),
        title: "Máy lọc nước ion kiềm là gì?".to_string(),
        meta_description: meta,
        content,
        outline: String::new(),
    }
}

#[test]
fn audit_emits_the_fixed_rule_ids_in_order_for_any_input() {
    for input in [AuditInput::default(), optimized_input()] {
        let checks = audit(&input);
        let ids: Vec<&str> = checks.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, RULE_IDS);
    }
}

#[test]
fn audit_never_duplicates_a_rule_id() {
    let checks = audit(&optimized_input());
    let mut ids: Vec<&str> = checks.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), RULE_IDS.len());
}

#[test]
fn audit_is_idempotent() {
    let input = optimized_input();
    assert_eq!(audit(&input), audit(&input));
}

#[test]
fn optimized_article_passes_every_satisfied_rule() {
    let checks = audit(&optimized_input());

    let expected_passed = [
        "1.2.2", "1.2.3", "1.3.1", "1.3.2", "1.4.1", "1.4.2", "1.4.3", "1.5.1", "1.5.2",
        "1.5.3", "1.5.4", "1.5.6", "1.5.7", "1.5.9", "1.5.10", "1.5.11", "1.5.12",
    ];
    for id in expected_passed {
        assert_eq!(status_of(&checks, id), CheckStatus::Passed, "rule {id}");
    }

    // deliberately unsatisfied: shallow URL, no video embed, no captions
    assert_eq!(status_of(&checks, "1.2.1"), CheckStatus::Warning);
    assert_eq!(status_of(&checks, "1.5.5"), CheckStatus::Warning);
    assert_eq!(status_of(&checks, "1.5.8"), CheckStatus::Warning);
}

#[test]
fn optimized_article_reports_its_metrics() {
    let checks = audit(&optimized_input());

    let url_len = checks.iter().find(|c| c.id == "1.2.3").unwrap();
    assert_eq!(url_len.message.as_deref(), Some("33 characters"));

    let meta_len = checks.iter().find(|c| c.id == "1.4.2").unwrap();
    assert_eq!(meta_len.message.as_deref(), Some("250 characters"));

    // 13 keyword occurrences among 1052 words
    let density = checks.iter().find(|c| c.id == "1.5.2").unwrap();
    assert_eq!(density.message.as_deref(), Some("1.24%"));

    let words = checks.iter().find(|c| c.id == "1.5.9").unwrap();
    assert_eq!(words.message.as_deref(), Some("1052 words"));

    let refs = checks.iter().find(|c| c.id == "1.5.11").unwrap();
    assert_eq!(refs.message.as_deref(), Some("3 links"));
}

#[test]
fn empty_page_degrades_every_rule_without_panicking() {
    let input = AuditInput {
        main_keyword: "kw".to_string(),
        ..AuditInput::default()
    };
    let checks = audit(&input);

    // length rules evaluate the empty string against their thresholds
    assert_eq!(status_of(&checks, "1.2.3"), CheckStatus::Passed);
    assert_eq!(status_of(&checks, "1.3.2"), CheckStatus::Passed);

    // keyword-bearing rules fail
    for id in ["1.2.2", "1.3.1", "1.4.1", "1.5.1", "1.5.3", "1.5.12"] {
        assert_eq!(status_of(&checks, id), CheckStatus::Failed, "rule {id}");
    }

    // structural rules route to their not-found branch
    for id in ["1.2.1", "1.4.2", "1.4.3", "1.5.2", "1.5.4", "1.5.5", "1.5.6", "1.5.8", "1.5.10", "1.5.11"] {
        assert_eq!(status_of(&checks, id), CheckStatus::Warning, "rule {id}");
    }
    assert_eq!(status_of(&checks, "1.5.7"), CheckStatus::Failed);
    assert_eq!(status_of(&checks, "1.5.9"), CheckStatus::Failed);

    let words = checks.iter().find(|c| c.id == "1.5.9").unwrap();
    assert_eq!(words.message.as_deref(), Some("0 words"));
}
