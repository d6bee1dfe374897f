//! 構文木の巡回

use super::*;

/// 構文木を巡回しながら呼ばれるフック
///
/// 既定の実装は何もしない。必要なものだけ上書きする。
#[allow(unused_variables)]
pub(crate) trait PTreeListener {
    fn enter_theory(&mut self, element: PElement, tree: &PTree) {}

    fn exit_theory(&mut self, element: PElement, tree: &PTree) {}

    fn enter_type_decl(&mut self, element: PElement, tree: &PTree) {}

    fn enter_formula_decl(&mut self, element: PElement, tree: &PTree) {}

    fn enter_function_decl(&mut self, element: PElement, tree: &PTree) {}

    fn enter_var_decl(&mut self, element: PElement, tree: &PTree) {}

    fn enter_type_id(&mut self, element: PElement, tree: &PTree) {}
}

fn enter(listener: &mut impl PTreeListener, element: PElement, tree: &PTree) {
    match tree.kind(element) {
        PElementKind::Theory => listener.enter_theory(element, tree),
        PElementKind::TypeDecl => listener.enter_type_decl(element, tree),
        PElementKind::FormulaDecl => listener.enter_formula_decl(element, tree),
        PElementKind::FunctionDecl => listener.enter_function_decl(element, tree),
        PElementKind::VarDecl => listener.enter_var_decl(element, tree),
        PElementKind::TypeId => listener.enter_type_id(element, tree),
        _ => {}
    }
}

fn exit(listener: &mut impl PTreeListener, element: PElement, tree: &PTree) {
    match tree.kind(element) {
        PElementKind::Theory => listener.exit_theory(element, tree),
        _ => {}
    }
}

fn walk_element(listener: &mut impl PTreeListener, element: PElement, tree: &PTree) {
    enter(listener, element, tree);

    for child in element.of(&tree.elements).children() {
        if let PNode::Element(child) = *child {
            walk_element(listener, child, tree);
        }
    }

    exit(listener, element, tree);
}

/// 構文木を深さ優先・行きがけ順に巡回して、要素の種類に応じたフックを呼ぶ。
pub(crate) fn walk(listener: &mut impl PTreeListener, tree: &PTree) {
    walk_element(listener, tree.root, tree);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::tests::parse_quietly;

    #[derive(Default)]
    struct EventRecorder {
        events: Vec<String>,
    }

    impl PTreeListener for EventRecorder {
        fn enter_theory(&mut self, _: PElement, _: &PTree) {
            self.events.push("enter theory".to_string());
        }

        fn exit_theory(&mut self, _: PElement, _: &PTree) {
            self.events.push("exit theory".to_string());
        }

        fn enter_type_decl(&mut self, element: PElement, tree: &PTree) {
            self.events.push(format!("type {}", tree.source_text(element)));
        }

        fn enter_function_decl(&mut self, element: PElement, tree: &PTree) {
            self.events.push(format!("function {}", tree.source_text(element)));
        }

        fn enter_type_id(&mut self, element: PElement, tree: &PTree) {
            self.events.push(format!("type id {}", tree.source_text(element)));
        }
    }

    #[test]
    fn test_walk_is_pre_order() {
        let tree = parse_quietly("t: THEORY BEGIN T: TYPE f(x: T): T = x END t");
        let mut recorder = EventRecorder::default();
        walk(&mut recorder, &tree);

        assert_eq!(
            recorder.events,
            vec![
                "enter theory",
                "type T: TYPE",
                "function f(x: T): T = x",
                "type id x: T",
                "exit theory",
            ]
        );
    }
}
