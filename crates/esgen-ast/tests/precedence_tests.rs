use crate::*;

fn ident(name: &str) -> Expression {
    Expression::identifier(name)
}

#[test]
fn test_ordering() {
    assert!(Precedence::Sequence < Precedence::Assignment);
    assert!(Precedence::Assignment < Precedence::Conditional);
    assert!(Precedence::Additive < Precedence::Multiplicative);
    assert!(Precedence::New < Precedence::Call);
    assert!(Precedence::Call < Precedence::Member);
    assert!(Precedence::Member < Precedence::Primary);
    assert_eq!(Precedence::YIELD, Precedence::Assignment);
    assert_eq!(Precedence::ARROW_FUNCTION, Precedence::Conditional);
}

#[test]
fn test_binary_operators() {
    let sum = Expression::binary(ident("a"), BinaryOperator::Plus, ident("b"));
    assert_eq!(sum.precedence(), Precedence::Additive);

    let seq = Expression::binary(ident("a"), BinaryOperator::Sequence, ident("b"));
    assert_eq!(seq.precedence(), Precedence::Sequence);

    assert_eq!(BinaryOperator::In.precedence(), Precedence::Relational);
    assert_eq!(BinaryOperator::StrictEqual.precedence(), Precedence::Equality);
    assert!(BinaryOperator::Exp.is_right_associative());
    assert!(!BinaryOperator::Minus.is_right_associative());
}

#[test]
fn test_new_depends_on_arguments() {
    assert_eq!(
        Expression::new_expr(ident("X"), Vec::new()).precedence(),
        Precedence::New
    );
    assert_eq!(
        Expression::new_expr(ident("X"), vec![ident("a")]).precedence(),
        Precedence::Member
    );
}

#[test]
fn test_member_inherits_call() {
    let call = Expression::call(ident("f"), Vec::new());
    assert_eq!(call.precedence(), Precedence::Call);
    assert_eq!(Expression::member(call.clone(), "x").precedence(), Precedence::Call);
    assert_eq!(Expression::member(ident("a"), "x").precedence(), Precedence::Member);
    assert_eq!(
        Expression::computed_member(call, ident("i")).precedence(),
        Precedence::Call
    );
}

#[test]
fn test_template_precedence() {
    assert_eq!(Expression::template(&["a"], Vec::new()).precedence(), Precedence::Primary);
    assert_eq!(
        Expression::tagged_template(ident("t"), &["a"], Vec::new()).precedence(),
        Precedence::TaggedTemplate
    );
    assert_eq!(
        Expression::tagged_template(Expression::call(ident("t"), Vec::new()), &["a"], Vec::new())
            .precedence(),
        Precedence::Call
    );
}

#[test]
fn test_call_on_left_spine() {
    let call = Expression::call(ident("f"), Vec::new());
    assert!(call.has_call_on_left_spine());
    assert!(Expression::member(call.clone(), "x").has_call_on_left_spine());
    assert!(
        Expression::member(Expression::member(call.clone(), "x"), "y").has_call_on_left_spine()
    );
    assert!(!Expression::member(ident("a"), "x").has_call_on_left_spine());

    // a call in argument position is not on the spine
    let member = Expression::computed_member(ident("a"), call);
    assert!(!member.has_call_on_left_spine());
}
