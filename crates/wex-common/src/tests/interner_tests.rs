use super::*;
use rayon::prelude::*;

#[test]
fn test_intern_deduplicates() {
    let interner = Interner::new();
    let a = interner.intern("Clone");
    let b = interner.intern("Clone");
    let c = interner.intern("x");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(&*interner.resolve(a), "Clone");
}

#[test]
fn test_empty_string_is_none_atom() {
    let interner = Interner::new();
    assert_eq!(interner.intern(""), Atom::NONE);
    assert!(Atom::NONE.is_none());
    assert_eq!(&*interner.resolve(Atom::NONE), "");
    assert!(interner.is_empty());
}

#[test]
fn test_get_does_not_intern() {
    let interner = Interner::new();
    assert_eq!(interner.get("missing"), None);
    assert_eq!(interner.len(), 1);

    let atom = interner.intern("present");
    assert_eq!(interner.get("present"), Some(atom));
}

#[test]
fn test_unknown_atom_resolves_to_empty() {
    let interner = Interner::new();
    assert_eq!(&*interner.resolve(Atom(999)), "");
}

#[test]
fn test_concurrent_interning_deduplication() {
    let interner = Interner::new();
    let names: Vec<String> = (0..1000).map(|i| format!("member_{}", i % 50)).collect();

    let atoms: Vec<Atom> = names.par_iter().map(|s| interner.intern(s)).collect();

    for (name, atom) in names.iter().zip(&atoms) {
        assert_eq!(interner.intern(name), *atom, "{name} should deduplicate");
    }
    // 50 distinct names plus the reserved empty string
    assert_eq!(interner.len(), 51);
}
