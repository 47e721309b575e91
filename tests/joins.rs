// tests/joins.rs
use anyhow::Result;
use ironseq::testing::*;
use ironseq::*;

#[derive(Debug, Clone, PartialEq)]
struct Person {
    first: &'static str,
    last: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
struct Pet {
    name: &'static str,
    owner: &'static str,
}

#[test]
fn join_different_source_types() -> Result<()> {
    let people = from_vec(vec![
        Person { first: "Magnus", last: "Hedlund" },
        Person { first: "Terry", last: "Adams" },
        Person { first: "Charlotte", last: "Weiss" },
        Person { first: "Nobody", last: "Owner" },
    ]);
    let pets = from_vec(vec![
        Pet { name: "Barley", owner: "Terry" },
        Pet { name: "Boots", owner: "Terry" },
        Pet { name: "Whiskers", owner: "Charlotte" },
        Pet { name: "Daisy", owner: "Magnus" },
    ]);

    let owners = people.join(
        pets,
        |p: &Person| p.first,
        |pet: &Pet| pet.owner,
        |p, pet| format!("{} {} - {}", p.first, p.last, pet.name),
    );

    assert_collections_equal(
        &owners.to_vec(),
        &[
            "Magnus Hedlund - Daisy".to_string(),
            "Terry Adams - Barley".to_string(),
            "Terry Adams - Boots".to_string(),
            "Charlotte Weiss - Whiskers".to_string(),
        ],
    );
    Ok(())
}

#[test]
fn join_with_case_insensitive_keys() -> Result<()> {
    let outer = from_vec(vec!["Ana", "BOB", "cid"]);
    let inner = from_vec(vec![("ana", 1), ("bob", 2), ("Ana", 3)]);

    let joined = outer.join_with(
        inner,
        |s: &&str| s.to_string(),
        |p: &(&str, i32)| p.0.to_string(),
        |o, i| (*o, i.1),
        EqualityBy::new(|k: &String| k.to_lowercase()),
    );
    assert_eq!(joined.to_vec(), vec![("Ana", 1), ("Ana", 3), ("BOB", 2)]);
    Ok(())
}

#[test]
fn join_with_empty_inner_is_empty() -> Result<()> {
    let joined = from_vec(vec![1, 2, 3]).join(
        from_vec(Vec::<i32>::new()),
        |x: &i32| *x,
        |y: &i32| *y,
        |x, y| x + y,
    );
    assert_eq!(joined.count(), 0);
    Ok(())
}

#[test]
fn inner_is_indexed_once_per_pass() -> Result<()> {
    let inner = CountingSource::new(vec![(1, 'a'), (2, 'b'), (1, 'c')]);
    let joined = from_vec(vec![1, 1, 2, 3]).join(
        inner.clone(),
        |x: &i32| *x,
        |y: &(i32, char)| y.0,
        |x, y| (*x, y.1),
    );
    assert_eq!(inner.pulled(), 0);

    assert_seq_yields(&joined, &[(1, 'a'), (1, 'c'), (1, 'a'), (1, 'c'), (2, 'b')]);
    assert_eq!(inner.passes(), 1);
    assert_eq!(inner.pulled(), 3);

    assert_restartable(&joined);
    assert_eq!(inner.passes(), 3);
    Ok(())
}
