use cgpa::{
    Band, CgpaError, GradeScale, SubjectRecord, UnknownGradePolicy, compute_breakdown,
    compute_breakdown_with,
};

fn records(pairs: &[(&str, u32)]) -> Vec<SubjectRecord> {
    pairs
        .iter()
        .map(|(g, c)| SubjectRecord::new(*g, *c))
        .collect()
}

fn cgpa_of(pairs: &[(&str, u32)]) -> Option<f64> {
    compute_breakdown(&records(pairs), &GradeScale::default()).cgpa()
}

#[test]
fn mixed_grades_weighted_by_credits() {
    let b = compute_breakdown(&records(&[("O", 4), ("A", 3), ("B+", 2)]), &GradeScale::default());

    assert_eq!(b.aggregate.total_points, 78);
    assert_eq!(b.aggregate.total_credits, 9);
    let cgpa = b.cgpa().expect("credits were entered");
    assert!((cgpa - 78.0 / 9.0).abs() < 1e-12);
    assert_eq!(Band::classify(cgpa), Band::Good);
}

#[test]
fn single_fail_is_zero() {
    let b = compute_breakdown(&records(&[("F", 3)]), &GradeScale::default());

    assert_eq!(b.aggregate.total_points, 0);
    assert_eq!(b.aggregate.total_credits, 3);
    assert_eq!(b.cgpa(), Some(0.0));
    assert_eq!(Band::classify(0.0), Band::NeedsImprovement);
}

#[test]
fn no_subjects_means_no_cgpa() {
    let b = compute_breakdown(&[], &GradeScale::default());

    assert!(b.subjects.is_empty());
    assert_eq!(b.aggregate.total_credits, 0);
    assert_eq!(b.cgpa(), None);
    assert!(matches!(b.aggregate.require_cgpa(), Err(CgpaError::EmptyCredits)));
}

#[test]
fn perfect_score_is_excellent() {
    let cgpa = cgpa_of(&[("O", 5)]).expect("defined");
    assert_eq!(cgpa, 10.0);
    assert_eq!(Band::classify(cgpa), Band::Excellent);
}

#[test]
fn cgpa_is_weighted_mean_of_grade_points() {
    let scale = GradeScale::default();
    let pairs = [("A+", 3), ("C", 1), ("P", 4), ("B", 2), ("E", 2)];
    let b = compute_breakdown(&records(&pairs), &scale);

    let points: u64 = pairs
        .iter()
        .map(|(g, c)| u64::from(scale.point_or_zero(g)) * u64::from(*c))
        .sum();
    let credits: u64 = pairs.iter().map(|(_, c)| u64::from(*c)).sum();

    assert_eq!(b.aggregate.total_points, points);
    assert_eq!(b.aggregate.total_credits, credits);
    assert!((b.cgpa().unwrap() - points as f64 / credits as f64).abs() < 1e-12);
}

#[test]
fn upgrading_a_grade_never_lowers_cgpa() {
    let scale = GradeScale::default();
    let base = [("B", 3), ("C", 4), ("A", 2)];
    let before = compute_breakdown(&records(&base), &scale).cgpa().unwrap();

    for slot in 0..base.len() {
        let current = scale.point_or_zero(base[slot].0);
        for better in scale.entries().iter().filter(|e| e.point() > current) {
            let mut upgraded = base;
            upgraded[slot].0 = better.grade();
            let after = compute_breakdown(&records(&upgraded), &scale).cgpa().unwrap();
            assert!(after >= before, "{upgraded:?} gave {after} < {before}");
        }
    }
}

#[test]
fn scaling_all_credits_keeps_cgpa() {
    let base = [("O", 4), ("A", 3), ("B+", 2), ("F", 1)];
    let reference = cgpa_of(&base).unwrap();

    for factor in [2, 3, 7, 100] {
        let scaled: Vec<(&str, u32)> = base.iter().map(|(g, c)| (*g, c * factor)).collect();
        let cgpa = cgpa_of(&scaled).unwrap();
        assert!((cgpa - reference).abs() < 1e-12, "factor {factor}: {cgpa} != {reference}");
    }
}

#[test]
fn order_only_changes_index_labels() {
    let forward = compute_breakdown(&records(&[("O", 4), ("B", 2)]), &GradeScale::default());
    let backward = compute_breakdown(&records(&[("B", 2), ("O", 4)]), &GradeScale::default());

    assert_eq!(forward.aggregate, backward.aggregate);
    assert_eq!(forward.subjects[0].grade, "O");
    assert_eq!(backward.subjects[0].grade, "B");
    assert_eq!(backward.subjects[1].index, 2);
}

#[test]
fn unknown_grades_depend_on_policy() {
    let input = records(&[("O", 2), ("o", 2)]);
    let scale = GradeScale::default();

    let soft = compute_breakdown_with(&input, &scale, UnknownGradePolicy::ScoreZero)
        .expect("fail-soft never errors");
    assert_eq!(soft.cgpa(), Some(5.0));
    assert_eq!(soft.unrecognized().map(|s| s.index).collect::<Vec<_>>(), [2]);

    let strict = compute_breakdown_with(&input, &scale, UnknownGradePolicy::Reject);
    assert!(matches!(strict, Err(CgpaError::UnknownGrade { index: 2, .. })));
}

#[test]
fn band_boundaries_are_inclusive_from_below() {
    // 7.5 exactly: 15 points over 2 credits
    let good = compute_breakdown(&records(&[("O", 1), ("C", 1)]), &GradeScale::default());
    assert_eq!(good.cgpa(), Some(7.5));
    assert_eq!(Band::classify(7.5), Band::Good);

    // 9.0 exactly
    let excellent = cgpa_of(&[("A+", 4)]).unwrap();
    assert_eq!(excellent, 9.0);
    assert_eq!(Band::classify(excellent), Band::Excellent);
}
