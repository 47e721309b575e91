// tests/laziness.rs
use anyhow::Result;
use ironseq::testing::*;
use ironseq::*;

#[test]
fn building_a_query_pulls_nothing() -> Result<()> {
    let a = CountingSource::new(vec![3, 1, 2, 3]);
    let b = CountingSource::new(vec![2, 3, 4]);

    let query = Seq::new(a.clone())
        .map(|x| x + 1)
        .union(b.clone(), DefaultEquality)
        .except(b.clone(), DefaultEquality)
        .intersect(a.clone(), DefaultEquality)
        .distinct(DefaultEquality)
        .zip(b.clone(), |x, y| (x, y))
        .join(a.clone(), |p: &(i32, i32)| p.1, |x: &i32| *x, |p, x| p.0 + x)
        .group_by(|x: &i32| *x, |x: &i32| *x, |k, v: Vec<i32>| (k, v.len()))
        .order_by(|g: &(i32, usize)| g.1, NaturalOrder);

    let _cursor = query.cursor();
    assert_eq!(a.pulled(), 0);
    assert_eq!(b.pulled(), 0);
    Ok(())
}

#[test]
fn every_cursor_restarts_from_the_sources() -> Result<()> {
    let source = CountingSource::new(vec![5, 1, 4, 1, 3]);
    let query = Seq::new(source.clone())
        .filter(|x: &i32| *x > 1)
        .flat_map(|x| vec![x, x * 10]);

    let mut first = query.cursor();
    assert_eq!(first.next(), Some(5));
    let second: Vec<i32> = query.cursor().collect();
    assert_eq!(second, vec![5, 50, 4, 40, 3, 30]);
    assert_eq!(first.next(), Some(50));
    assert_eq!(first.next(), Some(4));
    assert_eq!(source.passes(), 2);
    Ok(())
}

#[test]
fn pulls_only_what_is_consumed() -> Result<()> {
    let source = CountingSource::new((0..100).collect::<Vec<i32>>());
    let evens = Seq::new(source.clone()).filter(|x: &i32| x % 2 == 0);
    let firsts: Vec<i32> = evens.cursor().take(3).collect();
    assert_eq!(firsts, vec![0, 2, 4]);
    assert_eq!(source.pulled(), 5);
    Ok(())
}

#[test]
fn infinite_sources_compose() -> Result<()> {
    let naturals = from_fn(|| 1u64..);
    let odd_squares = naturals.map(|n| n * n).filter(|n: &u64| n % 2 == 1);
    let firsts: Vec<u64> = odd_squares.cursor().take(4).collect();
    assert_eq!(firsts, vec![1, 9, 25, 49]);
    Ok(())
}

#[test]
fn by_ref_lets_a_query_be_reused() -> Result<()> {
    let base = from_vec(vec![1, 2, 3]);
    let doubled = base.by_ref().map(|x| x * 2);
    let both = base.by_ref().union(doubled.as_inner(), DefaultEquality);

    assert_eq!(both.to_vec(), vec![1, 2, 3, 4, 6]);
    assert_eq!(base.to_vec(), vec![1, 2, 3]);
    Ok(())
}

#[test]
fn borrowed_slices_are_not_copied_up_front() -> Result<()> {
    let data = vec!["x".to_string(), "yy".to_string()];
    let lens = from_slice(&data).map(|s| s.len());
    assert_seq_yields(&lens, &[1, 2]);
    assert_restartable(&lens);
    Ok(())
}
