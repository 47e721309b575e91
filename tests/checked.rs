// tests/checked.rs
use anyhow::Result;
use ironseq::testing::*;
use ironseq::*;

fn missing(err: QueryError) -> (&'static str, &'static str) {
    match err {
        QueryError::InvalidArgument { operator, argument } => (operator, argument),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn missing_arguments_fail_before_any_pull() -> Result<()> {
    let src = CountingSource::new(vec![1, 2, 3]);

    let err = checked::filter(Some(src.clone()), None::<fn(&i32) -> bool>).unwrap_err();
    assert_eq!(missing(err), ("filter", "predicate"));

    let err = checked::map(None::<CountingSource<i32>>, Some(|x: i32| x + 1)).unwrap_err();
    assert_eq!(missing(err), ("map", "source"));

    let err = checked::union(Some(src.clone()), None::<CountingSource<i32>>, Some(DefaultEquality))
        .unwrap_err();
    assert_eq!(missing(err), ("union", "second"));

    let err = checked::intersect(Some(src.clone()), Some(src.clone()), None::<DefaultEquality>)
        .unwrap_err();
    assert_eq!(missing(err), ("intersect", "equality"));

    assert_eq!(src.passes(), 0);
    assert_eq!(src.pulled(), 0);
    Ok(())
}

#[test]
fn join_and_group_by_name_the_missing_selector() -> Result<()> {
    let err = checked::join(
        Some(from_vec(vec![1])),
        Some(from_vec(vec![1])),
        Some(|x: &i32| *x),
        None::<fn(&i32) -> i32>,
        Some(|x: &i32, y: &i32| x + y),
        Some(DefaultEquality),
    )
    .unwrap_err();
    assert_eq!(missing(err), ("join", "inner_key"));

    let err = checked::group_by(
        Some(from_vec(vec![1])),
        Some(|x: &i32| *x),
        Some(|x: &i32| *x),
        None::<fn(i32, Vec<i32>) -> usize>,
        Some(DefaultEquality),
    )
    .unwrap_err();
    assert_eq!(missing(err), ("group_by", "result"));
    Ok(())
}

#[test]
fn ordering_steps_are_validated_as_added() -> Result<()> {
    let err = checked::order_by(
        Some(from_vec(vec![2, 1])),
        None::<fn(&i32) -> i32>,
        Some(NaturalOrder),
        Dir::Asc,
    )
    .unwrap_err();
    assert_eq!(missing(err), ("order_by", "key"));

    let ordered = checked::order_by(
        Some(from_vec(vec![(1, 'b'), (0, 'z'), (1, 'a')])),
        Some(|p: &(i32, char)| p.0),
        Some(NaturalOrder),
        Dir::Asc,
    )?;

    let err = checked::then_by(
        Some(&ordered),
        Some(|p: &(i32, char)| p.1),
        None::<NaturalOrder>,
        Dir::Desc,
    )
    .unwrap_err();
    assert_eq!(missing(err), ("then_by", "comparer"));

    let refined = checked::then_by(
        Some(&ordered),
        Some(|p: &(i32, char)| p.1),
        Some(NaturalOrder),
        Dir::Desc,
    )?;
    assert_eq!(refined.to_vec(), vec![(0, 'z'), (1, 'b'), (1, 'a')]);
    Ok(())
}

#[test]
fn eager_operators_validate_then_run() -> Result<()> {
    let nums = || Some(from_vec(vec![1, 2, 3, 4]));

    assert_eq!(checked::aggregate(nums(), 0, Some(|a: i32, b: i32| a + b))?, 10);
    assert!(checked::all(nums(), Some(|x: &i32| *x > 0))?);
    assert!(checked::any(nums(), Some(|x: &i32| *x == 4))?);
    assert_eq!(checked::first(nums(), Some(|x: &i32| *x > 2))?, 3);

    let err = checked::aggregate(nums(), 0, None::<fn(i32, i32) -> i32>).unwrap_err();
    assert_eq!(missing(err), ("aggregate", "accumulator"));

    let err = checked::first(nums(), Some(|x: &i32| *x > 9)).unwrap_err();
    assert!(matches!(err, QueryError::NotFound { operator: "first" }));

    let err = checked::to_map(nums(), Some(|x: &i32| x % 2), Some(|x: &i32| *x)).unwrap_err();
    assert!(matches!(err, QueryError::DuplicateKey { .. }));
    Ok(())
}

#[test]
fn valid_arguments_build_the_same_query() -> Result<()> {
    let zipped = checked::zip(
        Some(from_vec(vec![1, 2, 3])),
        Some(from_vec(vec!["a", "b"])),
        Some(|n: i32, s: &str| format!("{s}{n}")),
    )?;
    assert_eq!(zipped.to_vec(), vec!["a1", "b2"]);

    let distinct = checked::distinct(Some(from_vec(vec![2, 2, 1])), Some(DefaultEquality))?;
    assert_eq!(distinct.to_vec(), vec![2, 1]);

    let except = checked::except(
        Some(from_vec(vec![1, 2, 3])),
        Some(from_vec(vec![2])),
        Some(DefaultEquality),
    )?;
    assert_eq!(except.to_vec(), vec![1, 3]);

    let flat = checked::flat_map(Some(from_vec(vec![1, 2])), Some(|x: i32| vec![x; x as usize]))?;
    assert_eq!(flat.to_vec(), vec![1, 2, 2]);
    Ok(())
}
