//! End-to-end resolution: registry + link store + resolver.

use rustc_hash::FxHashSet;

use cohort_core::types::{
    CohortId, ContributorId, DateRange, MemberType, MetricSnapshot, MetricType, PolicyKind,
    PopulationSnapshot, WorkflowStep,
};

use cohort_engine::cohorts::{CohortDraft, CohortRegistry, LogicalOperator};
use cohort_engine::conditions::{ComparisonOp, ConditionDraft};
use cohort_engine::policy::{
    Contributor, MembershipSource, PolicyLinkStore, ResolvedFrom, Resolver,
};

fn condition(metric: MetricType, operator: ComparisonOp, value: &str) -> ConditionDraft {
    ConditionDraft {
        metric,
        operator,
        value: value.to_string(),
        use_percentile: false,
    }
}

fn percentile_condition(metric: MetricType, operator: ComparisonOp, value: &str) -> ConditionDraft {
    ConditionDraft {
        metric,
        operator,
        value: value.to_string(),
        use_percentile: true,
    }
}

fn maker_draft(name: &str, conditions: Vec<ConditionDraft>, joiners: Vec<LogicalOperator>) -> CohortDraft {
    CohortDraft {
        name: name.to_string(),
        description: String::new(),
        step: WorkflowStep::Maker,
        member_type: MemberType::Makers,
        date_range: DateRange::Days(30),
        conditions,
        joiners,
    }
}

fn derivable(id: &str, metrics: Vec<(MetricType, f64)>) -> Contributor {
    Contributor {
        id: ContributorId::new(id),
        membership: MembershipSource::Derivable(metrics.into_iter().collect()),
    }
}

/// Two maker cohorts, a daily-limit store linking both, and one
/// contributor matching both: the smaller limit wins.
#[test]
fn daily_limit_picks_the_most_restrictive_override() {
    cohort_core::tracing::init_tracing();

    let mut registry = CohortRegistry::new();
    registry
        .create(
            CohortId::new("a"),
            &maker_draft(
                "A",
                vec![condition(MetricType::TasksSubmitted, ComparisonOp::GreaterThan, "100")],
                vec![],
            ),
        )
        .unwrap();
    registry
        .create(
            CohortId::new("b"),
            &maker_draft(
                "B",
                vec![condition(MetricType::AccuracyRate, ComparisonOp::LessThan, "80")],
                vec![],
            ),
        )
        .unwrap();

    let mut store = PolicyLinkStore::new(PolicyKind::DailyTaskLimit, 1.0);
    store.add_override(&registry, CohortId::new("a"), 5.0).unwrap();
    store.add_override(&registry, CohortId::new("b"), 10.0).unwrap();
    let config = store.save(&registry).unwrap();

    let population = PopulationSnapshot::new();
    let resolver = Resolver::new(&registry, &population);

    let in_both = derivable(
        "alice",
        vec![
            (MetricType::TasksSubmitted, 150.0),
            (MetricType::AccuracyRate, 70.0),
        ],
    );
    let resolved = resolver.resolve(&in_both, &config);
    assert_eq!(resolved.value, 5.0);
    assert!(matches!(resolved.from, ResolvedFrom::Overrides(ref ids) if ids.len() == 2));

    let only_b = derivable(
        "bob",
        vec![
            (MetricType::TasksSubmitted, 50.0),
            (MetricType::AccuracyRate, 70.0),
        ],
    );
    assert_eq!(resolver.resolve(&only_b, &config).value, 10.0);

    let neither = derivable(
        "carol",
        vec![
            (MetricType::TasksSubmitted, 50.0),
            (MetricType::AccuracyRate, 95.0),
        ],
    );
    let fallback = resolver.resolve(&neither, &config);
    assert_eq!(fallback.value, 1.0);
    assert_eq!(fallback.from, ResolvedFrom::Default);
}

/// QC sampling reduces by maximum: overlapping cohorts escalate.
#[test]
fn qc_sampling_picks_the_most_aggressive_override() {
    let mut registry = CohortRegistry::new();
    for (id, metric, threshold) in [
        ("slow", MetricType::AvgHandlingTime, "30"),
        ("inaccurate", MetricType::RejectionRate, "15"),
    ] {
        registry
            .create(
                CohortId::new(id),
                &CohortDraft {
                    name: id.to_string(),
                    description: String::new(),
                    step: WorkflowStep::Reviewer,
                    member_type: MemberType::Reviewer,
                    date_range: DateRange::Days(30),
                    conditions: vec![condition(metric, ComparisonOp::GreaterThan, threshold)],
                    joiners: vec![],
                },
            )
            .unwrap();
    }

    let mut store = PolicyLinkStore::new(PolicyKind::QcSampling, 100.0);
    store.add_override(&registry, CohortId::new("slow"), 20.0).unwrap();
    store.add_override(&registry, CohortId::new("inaccurate"), 60.0).unwrap();
    let config = store.save(&registry).unwrap();

    let population = PopulationSnapshot::new();
    let resolver = Resolver::new(&registry, &population);

    let in_both = derivable(
        "dana",
        vec![
            (MetricType::AvgHandlingTime, 45.0),
            (MetricType::RejectionRate, 20.0),
        ],
    );
    assert_eq!(resolver.resolve(&in_both, &config).value, 60.0);

    // No linked cohort matched: everything gets sampled by default.
    let clean = derivable(
        "erin",
        vec![
            (MetricType::AvgHandlingTime, 10.0),
            (MetricType::RejectionRate, 2.0),
        ],
    );
    assert_eq!(resolver.resolve(&clean, &config).value, 100.0);
}

/// Percentile thresholds resolve against the population at match time.
#[test]
fn percentile_cohorts_resolve_against_the_population() {
    let mut registry = CohortRegistry::new();
    registry
        .create(
            CohortId::new("bottom-half"),
            &maker_draft(
                "Bottom half",
                vec![percentile_condition(
                    MetricType::TasksSubmitted,
                    ComparisonOp::LessThan,
                    "P50",
                )],
                vec![],
            ),
        )
        .unwrap();

    let mut store = PolicyLinkStore::new(PolicyKind::DailyTaskLimit, 25.0);
    store
        .add_override(&registry, CohortId::new("bottom-half"), 5.0)
        .unwrap();
    let config = store.save(&registry).unwrap();

    // P50 of this distribution is 30.
    let population: PopulationSnapshot =
        [(MetricType::TasksSubmitted, vec![10.0, 20.0, 30.0, 40.0, 50.0])]
            .into_iter()
            .collect();
    let resolver = Resolver::new(&registry, &population);

    let below = derivable("fred", vec![(MetricType::TasksSubmitted, 20.0)]);
    assert_eq!(resolver.resolve(&below, &config).value, 5.0);

    let at_median = derivable("gina", vec![(MetricType::TasksSubmitted, 30.0)]);
    assert_eq!(resolver.resolve(&at_median, &config).value, 25.0);

    // Empty population: the condition fails closed, default applies.
    let empty = PopulationSnapshot::new();
    let resolver = Resolver::new(&registry, &empty);
    assert_eq!(resolver.resolve(&below, &config).value, 25.0);
}

/// An archived cohort keeps its override for cached members but is
/// never re-derived from fresh metrics.
#[test]
fn archived_cohort_applies_to_cached_members_only() {
    let mut registry = CohortRegistry::new();
    registry
        .create(
            CohortId::new("legacy"),
            &maker_draft(
                "Legacy",
                vec![condition(MetricType::TasksSubmitted, ComparisonOp::GreaterThan, "0")],
                vec![],
            ),
        )
        .unwrap();

    let mut store = PolicyLinkStore::new(PolicyKind::DailyTaskLimit, 20.0);
    store.add_override(&registry, CohortId::new("legacy"), 3.0).unwrap();
    let config = store.save(&registry).unwrap();

    registry.archive(&CohortId::new("legacy")).unwrap();

    let population = PopulationSnapshot::new();
    let resolver = Resolver::new(&registry, &population);

    // Cached membership still carries the override.
    let cached = Contributor {
        id: ContributorId::new("harry"),
        membership: MembershipSource::Precomputed(
            [CohortId::new("legacy")].into_iter().collect::<FxHashSet<_>>(),
        ),
    };
    assert_eq!(resolver.resolve(&cached, &config).value, 3.0);

    // Fresh derivation ignores the archived cohort even though the
    // metrics would qualify.
    let fresh = derivable("iris", vec![(MetricType::TasksSubmitted, 500.0)]);
    assert_eq!(resolver.resolve(&fresh, &config).value, 20.0);
}

/// A disabled daily limit imposes no cap at all.
#[test]
fn disabled_policy_resolves_to_nothing() {
    let mut registry = CohortRegistry::new();
    registry
        .create(
            CohortId::new("a"),
            &maker_draft(
                "A",
                vec![condition(MetricType::TasksSubmitted, ComparisonOp::GreaterThan, "0")],
                vec![],
            ),
        )
        .unwrap();

    let mut store = PolicyLinkStore::new(PolicyKind::DailyTaskLimit, 1.0);
    store.add_override(&registry, CohortId::new("a"), 5.0).unwrap();
    store.set_enabled(false);
    let config = store.save(&registry).unwrap();

    let population = PopulationSnapshot::new();
    let resolver = Resolver::new(&registry, &population);
    let member = derivable("jack", vec![(MetricType::TasksSubmitted, 10.0)]);

    assert_eq!(resolver.effective(&member, &config), None);
    // The underlying resolution is still available for inspection.
    assert_eq!(resolver.resolve(&member, &config).value, 5.0);
}

/// Multi-condition cohorts combine left to right through the resolver
/// path too.
#[test]
fn multi_condition_cohort_matches_through_resolution() {
    let mut registry = CohortRegistry::new();
    registry
        .create(
            CohortId::new("struggling"),
            &maker_draft(
                "Struggling",
                vec![
                    condition(MetricType::TasksRejected, ComparisonOp::GreaterThan, "5"),
                    condition(MetricType::AccuracyRate, ComparisonOp::LessThan, "70"),
                ],
                vec![LogicalOperator::Or],
            ),
        )
        .unwrap();

    let mut store = PolicyLinkStore::new(PolicyKind::DailyTaskLimit, 25.0);
    store
        .add_override(&registry, CohortId::new("struggling"), 5.0)
        .unwrap();
    let config = store.save(&registry).unwrap();

    let population = PopulationSnapshot::new();
    let resolver = Resolver::new(&registry, &population);

    let rejected_only = derivable(
        "kate",
        vec![
            (MetricType::TasksRejected, 8.0),
            (MetricType::AccuracyRate, 90.0),
        ],
    );
    assert_eq!(resolver.resolve(&rejected_only, &config).value, 5.0);

    let fine = derivable(
        "liam",
        vec![
            (MetricType::TasksRejected, 1.0),
            (MetricType::AccuracyRate, 95.0),
        ],
    );
    assert_eq!(resolver.resolve(&fine, &config).value, 25.0);
}

/// Parallel batch resolution agrees with one-at-a-time resolution.
#[test]
fn resolve_all_matches_sequential_resolution() {
    let mut registry = CohortRegistry::new();
    registry
        .create(
            CohortId::new("busy"),
            &maker_draft(
                "Busy",
                vec![condition(MetricType::TasksSubmitted, ComparisonOp::GreaterOrEqual, "50")],
                vec![],
            ),
        )
        .unwrap();

    let mut store = PolicyLinkStore::new(PolicyKind::DailyTaskLimit, 10.0);
    store.add_override(&registry, CohortId::new("busy"), 4.0).unwrap();
    let config = store.save(&registry).unwrap();

    let population = PopulationSnapshot::new();
    let resolver = Resolver::new(&registry, &population);

    let contributors: Vec<Contributor> = (0..64)
        .map(|i| {
            derivable(
                &format!("worker-{i}"),
                vec![(MetricType::TasksSubmitted, i as f64 * 2.0)],
            )
        })
        .collect();

    let batch = resolver.resolve_all(&contributors, &config);
    assert_eq!(batch.len(), contributors.len());
    for (contributor, (id, resolved)) in contributors.iter().zip(&batch) {
        assert_eq!(&contributor.id, id);
        assert_eq!(&resolver.resolve(contributor, &config), resolved);
    }
}
