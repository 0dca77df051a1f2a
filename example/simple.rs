use ordkv::{BinarySearchTree, Options, SkipList, SortedList, Traversal, Treap};
use slog::Level;

fn main() {
    let mut opt = Options::default();
    opt.seed = Some(0xdead_beef);
    opt.info_log = Some(logger::stderr_logger(Level::Debug));
    let mut sl = SkipList::with_options(opt).unwrap();

    for (k, v) in [(5, "five"), (1, "one"), (9, "nine"), (3, "three")] {
        sl.insert(k, v.to_string());
    }
    assert_eq!(sl.get(3).map(String::as_str), Some("three"));
    assert!(sl.remove(1).is_some());
    assert!(!sl.contains_key(1));
    print!("{}", sl);

    for k in 10..26 {
        sl.insert(k, k.to_string());
    }
    println!("random towers:\n{}", sl.level_diagram());
    sl.reconfigure();
    println!("after reconfigure:\n{}", sl.level_diagram());
    sl.check().unwrap();

    let mut a = SortedList::new();
    a.insert(1, "a");
    a.insert(3, "c");
    let mut b = SortedList::new();
    b.insert(2, "b");
    b.insert(3, "x");
    println!("a + b = {}", &a + &b);
    println!("a - b = {}", &a - &b);

    let mut bst = BinarySearchTree::new();
    let mut treap = Treap::with_seed(7);
    for k in 1..=15 {
        bst.insert(k, ());
        treap.insert(k, ());
    }
    println!("bst height {}, treap height {}", bst.height(), treap.height());
    println!("treap preorder {:?}", treap.traverse(Traversal::Preorder));
    print!("{}", treap.render());
}
