use super::*;

fn node(id: u64, rect: Rect, layer: u8, z: u32, sense: Sense) -> Node {
    Node {
        id: Id::raw(id),
        rect,
        layer,
        z,
        sense,
        kind: NodeKind::Unknown,
    }
}

#[test]
fn hit_test_prefers_higher_layer() {
    let mut tree = UiTree::new();
    let r = Rect::new(0, 0, 10, 10);
    tree.push(node(1, r, 0, 1, Sense::CLICK));
    tree.push(node(2, r, 1, 0, Sense::CLICK));

    let hit = tree.hit_test(Pos::new(5, 5)).unwrap();
    assert_eq!(hit.id, Id::raw(2));
}

#[test]
fn hit_test_prefers_later_nodes_within_same_layer() {
    let mut tree = UiTree::new();
    let r = Rect::new(0, 0, 10, 10);
    tree.push(node(1, r, 0, 0, Sense::CLICK));
    tree.push(node(2, r, 0, 0, Sense::CLICK));

    let hit = tree.hit_test(Pos::new(5, 5)).unwrap();
    assert_eq!(hit.id, Id::raw(2));
}

#[test]
fn hit_test_with_sense_filters_nodes() {
    let mut tree = UiTree::new();
    let r = Rect::new(0, 0, 10, 10);
    tree.push(node(1, r, 0, 1, Sense::CLICK));
    tree.push(node(2, r, 0, 2, Sense::HOVER));

    assert_eq!(
        tree.hit_test_with_sense(Pos::new(5, 5), Sense::CLICK)
            .unwrap()
            .id,
        Id::raw(1)
    );
    assert_eq!(
        tree.hit_test_with_sense(Pos::new(5, 5), Sense::HOVER)
            .unwrap()
            .id,
        Id::raw(2)
    );
    assert!(tree
        .hit_test_with_sense(Pos::new(5, 5), Sense::FOCUS)
        .is_none());
}

#[test]
fn focus_order_follows_insertion_order() {
    let mut tree = UiTree::new();
    tree.push(node(3, Rect::new(0, 0, 1, 1), 0, 0, Sense::FOCUS));
    tree.push(node(1, Rect::new(0, 1, 1, 1), 0, 0, Sense::CLICK));
    tree.push(node(2, Rect::new(0, 2, 1, 1), 1, 0, Sense::FOCUS | Sense::CLICK));

    assert_eq!(tree.focus_order(), vec![Id::raw(3), Id::raw(2)]);
}

#[test]
fn focusable_within_filters_by_layer_and_container() {
    let mut tree = UiTree::new();
    let container = Rect::new(10, 10, 10, 5);
    tree.push(node(1, Rect::new(0, 0, 4, 1), 1, 0, Sense::FOCUS));
    tree.push(node(2, Rect::new(11, 11, 4, 1), 1, 0, Sense::FOCUS));
    tree.push(node(3, Rect::new(12, 12, 4, 1), 0, 0, Sense::FOCUS));
    tree.push(node(4, Rect::new(12, 13, 4, 1), 1, 0, Sense::FOCUS));
    tree.push(node(5, Rect::new(12, 13, 4, 1), 1, 0, Sense::CLICK));

    assert_eq!(
        tree.focusable_within(1, container),
        vec![Id::raw(2), Id::raw(4)]
    );
    assert!(tree.focusable_within(2, container).is_empty());
}

#[test]
fn semantics_are_replaced_and_cleared() {
    let mut tree = UiTree::new();
    tree.set_semantics(Id::raw(1), Semantics::new(Role::Dialog));
    tree.set_semantics(
        Id::raw(1),
        Semantics::new(Role::Dialog)
            .modal(true)
            .labelled_by(Id::raw(2)),
    );

    let s = tree.semantics(Id::raw(1)).unwrap();
    assert!(s.modal);
    assert_eq!(s.labelled_by, Some(Id::raw(2)));

    tree.clear();
    assert!(tree.semantics(Id::raw(1)).is_none());
}

#[test]
fn find_kind_returns_first_match() {
    let mut tree = UiTree::new();
    let mut n = node(7, Rect::new(0, 0, 1, 1), 0, 0, Sense::NONE);
    n.kind = NodeKind::ModalPanel;
    tree.push(n);
    assert_eq!(tree.find_kind(NodeKind::ModalPanel).unwrap().id, Id::raw(7));
    assert!(tree.find_kind(NodeKind::ModalClose).is_none());
}
