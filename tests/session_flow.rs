//! End-to-end page flows through `ArchiveSession`: load, expand, select,
//! and the notification stream the hosting pages render from.

use adarc::category::{
    CategoryId, CategoryRecord, DisplayMode, OwnerGroup, SelectionChange, SelectionLimit,
};
use adarc::{ArchiveConfig, ArchiveSession, SessionEvent};
use pretty_assertions::assert_eq;

/// A small two-group fixture resembling the archive's category list:
/// holding-side campaign tree plus a bank-side root.
fn fixture() -> Vec<CategoryRecord> {
    let rec = |id: &str, parent: Option<&str>, group: OwnerGroup, order: i64, contents: u64| {
        CategoryRecord {
            id: CategoryId::from(id),
            name: id.to_uppercase(),
            parent_id: parent.map(CategoryId::from),
            owner_group: group,
            order,
            content_count: Some(contents),
            project_count: Some(contents / 2),
        }
    };
    vec![
        rec("campaigns", None, OwnerGroup::Holding, 1, 10),
        rec("tv", Some("campaigns"), OwnerGroup::Holding, 1, 6),
        rec("digital", Some("campaigns"), OwnerGroup::Holding, 2, 4),
        rec("brand", None, OwnerGroup::Holding, 2, 2),
        rec("retail", None, OwnerGroup::Bank, 1, 8),
    ]
}

fn drain(session: &mut ArchiveSession) -> Vec<SessionEvent> {
    std::iter::from_fn(|| session.poll_event()).collect()
}

#[test]
fn browse_page_flow() {
    let mut session = ArchiveSession::new(DisplayMode::Browse, &ArchiveConfig::default());
    session.load_categories(&fixture());

    // Group headers show content counts in browse mode, summed over roots
    // only (children are pre-folded into the parent figures).
    assert_eq!(session.group_count(OwnerGroup::Holding), 12);
    assert_eq!(session.group_count(OwnerGroup::Bank), 8);

    // Initial render: collapsed roots, per-group panels.
    let holding = session.display_items_for(OwnerGroup::Holding);
    let names: Vec<&str> = holding.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["CAMPAIGNS", "BRAND"]);
    assert!(holding[0].has_children);
    assert!(!holding[0].is_expanded);

    // Drill into campaigns: children appear sorted by order.
    session.toggle_expansion(&CategoryId::from("campaigns"));
    let holding = session.display_items_for(OwnerGroup::Holding);
    let names: Vec<&str> = holding.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["CAMPAIGNS", "TV", "DIGITAL", "BRAND"]);
    assert_eq!(holding[1].depth, 1);

    // Browse is single-select: picking a second category is rejected until
    // the first is deselected.
    session.toggle_selection(&CategoryId::from("tv"));
    assert_eq!(
        session.toggle_selection(&CategoryId::from("digital")),
        SelectionChange::CapacityExceeded { max: 1 }
    );
    session.toggle_selection(&CategoryId::from("tv"));
    session.toggle_selection(&CategoryId::from("digital"));
    assert_eq!(session.selection(), &[CategoryId::from("digital")]);
}

#[test]
fn assign_page_flow_with_cap_notice() {
    let mut session = ArchiveSession::new(DisplayMode::Assign, &ArchiveConfig::default());
    session.load_categories(&fixture());
    drain(&mut session);

    // Assign mode displays project counts.
    assert_eq!(session.group_count(OwnerGroup::Holding), 6); // 5 + 1
    assert_eq!(session.group_count(OwnerGroup::Bank), 4);

    for id in ["tv", "digital", "brand"] {
        assert_eq!(
            session.toggle_selection(&CategoryId::from(id)),
            SelectionChange::Added
        );
    }
    assert_eq!(
        session.toggle_selection(&CategoryId::from("retail")),
        SelectionChange::CapacityExceeded { max: 3 }
    );

    let events = drain(&mut session);
    assert_eq!(events.len(), 4);
    // Each accepted toggle carried the full selection so far.
    assert_eq!(
        events[2],
        SessionEvent::SelectionChanged(vec![
            CategoryId::from("tv"),
            CategoryId::from("digital"),
            CategoryId::from("brand"),
        ])
    );
    assert_eq!(events[3], SessionEvent::SelectionRejected { max: 3 });

    // The rejected toggle left the selection untouched.
    assert_eq!(session.selection().len(), 3);
}

#[test]
fn expansion_events_carry_full_set() {
    let mut session = ArchiveSession::new(DisplayMode::Browse, &ArchiveConfig::default());
    session.load_categories(&fixture());
    drain(&mut session);

    session.toggle_expansion(&CategoryId::from("campaigns"));
    session.toggle_expansion(&CategoryId::from("brand"));

    let events = drain(&mut session);
    let SessionEvent::ExpansionChanged(last) = events.last().unwrap() else {
        panic!("expected an expansion event");
    };
    assert!(last.contains(&CategoryId::from("campaigns")));
    assert!(last.contains(&CategoryId::from("brand")));
    assert_eq!(last.len(), 2);
}

#[test]
fn navigation_reload_resets_transient_state() {
    let mut session = ArchiveSession::new(DisplayMode::Assign, &ArchiveConfig::default());
    session.load_categories(&fixture());
    session.toggle_selection(&CategoryId::from("tv"));
    session.toggle_expansion(&CategoryId::from("campaigns"));

    // Navigating to another page fetches the list again.
    session.load_categories(&fixture());
    assert!(session.selection().is_empty());
    assert!(session.expansion().is_empty());
    assert_eq!(session.display_items().len(), 3); // collapsed roots only
}

#[test]
fn page_supplied_cap_overrides_config() {
    let mut session = ArchiveSession::with_limit(DisplayMode::Assign, SelectionLimit::from_raw(0));
    session.load_categories(&fixture());
    for id in ["campaigns", "tv", "digital", "brand", "retail"] {
        assert_eq!(
            session.toggle_selection(&CategoryId::from(id)),
            SelectionChange::Added
        );
    }
    assert_eq!(session.selection().len(), 5);
}
