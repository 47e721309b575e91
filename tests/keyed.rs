// tests/keyed.rs
use anyhow::Result;
use ironseq::testing::*;
use ironseq::*;

#[test]
fn group_by_first_seen_key_order() -> Result<()> {
    let words = from_vec(vec!["abc", "hello", "def", "there", "four"]);
    let groups = words.group_by(
        |w: &&str| w.len(),
        |w: &&str| w.chars().next().unwrap_or_default(),
        |len, firsts| Grouping { key: len, members: firsts },
    );
    assert_groups_equal(
        &groups.to_vec(),
        &[(3, vec!['a', 'd']), (5, vec!['h', 't']), (4, vec!['f'])],
    );
    Ok(())
}

#[test]
fn group_by_with_keeps_the_first_spelling_of_a_key() -> Result<()> {
    let words = from_vec(vec!["Apple", "avocado", "Banana", "apricot", "blueberry"]);
    let groups = words.group_by_with(
        |w: &&str| w[..1].to_string(),
        |w: &&str| *w,
        |k, v| (k, v),
        EqualityBy::new(|k: &String| k.to_lowercase()),
    );
    assert_eq!(
        groups.to_vec(),
        vec![
            ("A".to_string(), vec!["Apple", "avocado", "apricot"]),
            ("B".to_string(), vec!["Banana", "blueberry"]),
        ]
    );
    Ok(())
}

#[test]
fn group_by_builds_buckets_on_first_pull() -> Result<()> {
    let source = CountingSource::new(vec![1, 2, 3, 4, 5]);
    let groups = Seq::new(source.clone()).group_by(
        |x: &i32| x % 2,
        |x: &i32| *x,
        |k, v: Vec<i32>| (k, v.len()),
    );
    assert_eq!(source.pulled(), 0);

    let mut cursor = groups.cursor();
    assert_eq!(cursor.next(), Some((1, 3)));
    assert_eq!(source.pulled(), 5);
    assert_eq!(cursor.next(), Some((0, 2)));
    assert_eq!(cursor.next(), None);
    Ok(())
}

#[test]
fn to_lookup_indexes_every_member() -> Result<()> {
    let lookup = from_vec(vec!["bee", "ox", "cat", "ant", "yak"])
        .to_lookup(|w: &&str| w.len(), |w: &&str| w.to_uppercase());

    assert_eq!(lookup.len(), 2);
    assert_eq!(lookup.get(&3), ["BEE", "CAT", "ANT", "YAK"]);
    assert_eq!(lookup.get(&2), ["OX"]);
    assert!(lookup.get(&9).is_empty());
    assert!(!lookup.contains_key(&9));
    assert_eq!(lookup.keys().copied().collect::<Vec<_>>(), vec![3, 2]);
    Ok(())
}

#[test]
fn to_map_with_unique_keys() -> Result<()> {
    let map = from_vec(vec![("a", 1), ("b", 2)]).to_map(|p: &(&str, i32)| p.0, |p: &(&str, i32)| p.1)?;
    assert_eq!(map.len(), 2);
    assert_eq!(map["a"], 1);
    assert_eq!(map["b"], 2);
    Ok(())
}

#[test]
fn to_map_rejects_duplicate_keys() -> Result<()> {
    let err = from_vec(vec![1, 2, 4])
        .to_map(|x: &i32| x % 2, |x: &i32| *x)
        .unwrap_err();
    assert_eq!(
        err,
        QueryError::DuplicateKey {
            operator: "to_map",
            key: "0".to_string()
        }
    );
    Ok(())
}

#[test]
fn to_map_opt_rejects_missing_keys() -> Result<()> {
    let err = from_vec(vec!["1", "x", "2"])
        .to_map_opt(|s: &&str| s.parse::<u8>().ok(), |s: &&str| s.len())
        .unwrap_err();
    assert!(matches!(err, QueryError::DuplicateKey { ref key, .. } if key == "<none>"));
    assert!(err.to_string().contains("to_map"));
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn groupings_serialize_with_named_fields() -> Result<()> {
    let g = Grouping { key: 3, members: vec!['a', 'd'] };
    assert_eq!(serde_json::to_string(&g)?, r#"{"key":3,"members":["a","d"]}"#);

    let dir: Dir = serde_json::from_str(r#""Desc""#)?;
    assert_eq!(dir, Dir::Desc);
    Ok(())
}
