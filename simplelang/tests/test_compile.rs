use simplelang::{
    compile::{generate, LabelAllocator, SymbolConf, SymbolTable},
    compile_str, compile_with,
    constants::MAX_NESTING,
    error::{CompileError, ParseErrorKind},
    lex::{LexConf, WordOverflow},
    parse, tokenize, CompileConf,
};

const IF_ELSE: &str = include_str!("if_else.sl");
const ARITH: &str = include_str!("arith.sl");

fn asm(source: &str) -> Vec<String> {
    compile_str(source).unwrap().assembly.lines()
}

#[test]
fn test_compile_if_else() {
    let compilation = compile_str(IF_ELSE).unwrap();

    assert_eq!(
        compilation.asm_listing(),
        "ldi A 0
mov M A 100
mov A M 100
cmp A 0
jne else_part_1
ldi A 1
mov M A 102
jmp end_if_2
else_part_1:
ldi A 2
mov M A 102
end_if_2:
end:
hlt
"
    );

    assert_eq!(
        compilation.ast_listing(),
        "AST Node: int a, b;
AST Node: a = 0;
AST Node: if (a == 0) {
    AST Node: b = 1;
} else {
    AST Node: b = 2;
}
"
    );

    let listing = compilation.token_listing();
    assert!(listing.starts_with("Token: int\nToken: a\nToken: ,\nToken: b\nToken: ;\n"));
    assert!(listing.contains("Token: ==\n"));
    assert!(listing.ends_with("Token: }\n"));
}

#[test]
fn test_compile_arith() {
    assert_eq!(
        asm(ARITH),
        vec![
            "ldi A 5",
            "mov M A 100",
            "ldi A 3",
            "mov M A 102",
            "mov A M 100",
            "add M 102",
            "mov M A 103",
            "mov A M 103",
            "sub M 100",
            "mov M A 103",
            "mov A M 100",
            "add M 101",
            "mov M A 100",
            "mov A M 102",
            "sub M 101",
            "mov M A 102",
            "end:",
            "hlt",
        ]
    );
}

#[test]
fn test_condition_value_only_changes_immediate() {
    let zero = asm("if (a == 0) { b = 1; } else { b = 2; }");
    let seven = asm("if (a == 7) { b = 1; } else { b = 2; }");

    assert_eq!(zero.len(), seven.len());
    let diff = zero
        .iter()
        .zip(seven.iter())
        .filter(|(x, y)| x != y)
        .collect::<Vec<_>>();
    assert_eq!(diff, vec![(&"cmp A 0".to_string(), &"cmp A 7".to_string())]);
}

#[test]
fn test_nested_conditionals() {
    let lines = asm("if (a == 1) {\n if (b == 2) {\n c = 3;\n }\n} else {\n c = 4;\n}");

    assert_eq!(
        lines,
        vec![
            "mov A M 100",
            "cmp A 1",
            "jne else_part_1",
            "mov A M 102",
            "cmp A 2",
            "jne else_part_4",
            "ldi A 3",
            "mov M A 103",
            "else_part_4:",
            "end_if_5:",
            "jmp end_if_2",
            "else_part_1:",
            "ldi A 4",
            "mov M A 103",
            "end_if_2:",
            "end:",
            "hlt",
        ]
    );
}

#[test]
fn test_no_state_between_runs() {
    let first = compile_str(IF_ELSE).unwrap().asm_listing();
    let second = compile_str(IF_ELSE).unwrap().asm_listing();
    assert_eq!(first, second);
}

#[test]
fn test_tokenize_is_restartable() {
    assert_eq!(tokenize(IF_ELSE).unwrap(), tokenize(IF_ELSE).unwrap());
}

#[test]
fn test_phases_separately() {
    let tokens = tokenize("x = y + 1;").unwrap();
    let program = parse(tokens).unwrap();

    let mut symbols = SymbolTable::default();
    let mut labels = LabelAllocator::new();
    let assembly = generate(&program, &mut symbols, &mut labels).unwrap();

    assert_eq!(
        assembly.lines(),
        vec!["mov A M 102", "add M 101", "mov M A 100", "end:", "hlt"]
    );
    assert_eq!(symbols.get("x"), Some(100));
    assert_eq!(symbols.get("y"), Some(102));
}

#[test]
fn test_parse_error_reports_line() {
    let source = "int a;\na = 1;\na = a * 2;\n";
    let err = compile_str(source).unwrap_err();

    assert_eq!(err.line(), Some(3));
    match &err {
        CompileError::Parse(err) => assert_eq!(err.kind, ParseErrorKind::MalformedAssignment),
        other => panic!("expected parse error, got {other:?}"),
    }

    let report = err.report(source);
    assert!(report.starts_with("error: line 3: malformed assignment"));
    assert!(report.contains("3 | a = a * 2;"));
}

fn nested_ifs(depth: usize) -> String {
    let mut source = "if (a == 1) {\n".repeat(depth);
    source.push_str("b = 1;\n");
    source.push_str(&"}\n".repeat(depth));
    source
}

#[test]
fn test_deepest_nesting_compiles() {
    let compilation = compile_str(&nested_ifs(MAX_NESTING)).unwrap();

    let labels = compilation
        .assembly
        .lines()
        .into_iter()
        .filter(|line| line.starts_with("end_if_"))
        .count();
    assert_eq!(labels, MAX_NESTING);
    assert_eq!(compilation.ast_listing().lines().count(), MAX_NESTING * 2 + 1);
}

#[test]
fn test_nesting_too_deep() {
    let source = nested_ifs(20_000);
    let err = compile_str(&source).unwrap_err();

    assert_eq!(err.line(), Some(MAX_NESTING + 1));
    match &err {
        CompileError::Parse(err) => assert_eq!(err.kind, ParseErrorKind::NestingTooDeep),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(err.report(&source).contains("nested too deeply"));
}

#[test]
fn test_symbol_table_full() {
    let conf = CompileConf {
        symbols: SymbolConf {
            capacity: 2,
            ..Default::default()
        },
        ..Default::default()
    };

    let err = compile_with("a = 1;\nb = 2;\nc = 3;", &conf).unwrap_err();
    assert_eq!(err.line(), Some(3));
    assert!(matches!(err, CompileError::Codegen(_)));
}

#[test]
fn test_word_too_long() {
    let conf = CompileConf {
        lex: LexConf {
            max_word_len: 3,
            overflow: WordOverflow::Reject,
        },
        ..Default::default()
    };

    let err = compile_with("abc = 1;\nabcd = 2;", &conf).unwrap_err();
    assert!(matches!(err, CompileError::Lex(_)));
    assert_eq!(err.line(), Some(2));
}

#[test]
fn test_truncated_words_share_address() {
    let conf = CompileConf {
        lex: LexConf {
            max_word_len: 3,
            overflow: WordOverflow::Truncate,
        },
        ..Default::default()
    };

    let compilation = compile_with("abcd = 1;\nabcx = 2;", &conf).unwrap();
    assert!(compilation.tokens[0].truncated);
    assert_eq!(
        compilation.assembly.lines(),
        vec!["ldi A 1", "mov M A 100", "ldi A 2", "mov M A 100", "end:", "hlt"]
    );
}
