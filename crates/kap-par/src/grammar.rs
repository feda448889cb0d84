//! The context-free grammar itself (§4.E): one production list per
//! non-terminal, transcribed from the language's reference grammar.

use kap_lex::TokenKind::*;

use crate::nonterminal::NonTerminal::{self, *};
use crate::symbol::{n, t, Production, Symbol};

macro_rules! prod {
    ($($sym:expr),* $(,)?) => {
        &[$($sym),*] as Production
    };
}

/// All productions for a single non-terminal, in declaration order (the
/// order that matters when more than one alternative shares a FIRST
/// terminal during parse-table construction diagnostics).
pub fn productions(nt: NonTerminal) -> &'static [Production] {
    match nt {
        START => &[prod![n(prog)]],

        aParams => &[prod![n(expr), n(aParamsTail)], prod![]],

        aParamsTail => &[prod![t(Comma), n(expr), n(aParamsTail)], prod![]],

        addOp => &[prod![t(Plus)], prod![t(Minus)], prod![t(Or)]],

        arithExpr => &[prod![n(term), n(arithExprTail)]],

        arithExprTail => &[prod![n(addOp), n(term), n(arithExprTail)], prod![]],

        arraySize => &[prod![t(OpenBracket), n(arraySizeTail)]],

        arraySizeTail => &[
            prod![t(IntNum), t(CloseBracket)],
            prod![t(CloseBracket)],
        ],

        assignOp => &[prod![t(Assign)]],

        classDecl => &[prod![
            t(Class),
            t(Id),
            n(classInheritOpt),
            t(OpenBrace),
            n(classMemberList),
            t(CloseBrace),
            t(Semicolon),
        ]],

        classInheritOpt => &[
            prod![t(Inherits), t(Id), n(classInheritTail)],
            prod![],
        ],

        classInheritTail => &[
            prod![t(Comma), t(Id), n(classInheritTail)],
            prod![],
        ],

        classList => &[prod![n(classDecl), n(classList)], prod![]],

        classMemberList => &[
            prod![n(visibility), n(memberDecl), n(classMemberList)],
            prod![],
        ],

        expr => &[prod![n(arithExpr), n(exprRelTail)]],

        exprRelTail => &[prod![n(relOp), n(arithExpr)], prod![]],

        fParams => &[
            prod![n(type_), t(Id), n(fParamsArrayList), n(fParamsTail)],
            prod![],
        ],

        fParamsArrayList => &[prod![n(arraySize), n(fParamsArrayList)], prod![]],

        fParamsTail => &[
            prod![t(Comma), n(type_), t(Id), n(fParamsArrayList), n(fParamsTail)],
            prod![],
        ],

        factor => &[
            prod![t(Id), n(postfixList)],
            prod![t(IntNum)],
            prod![t(FloatNum)],
            prod![t(OpenParen), n(arithExpr), t(CloseParen)],
            prod![t(Not), n(factor)],
            prod![n(sign), n(factor)],
        ],

        funcBody => &[prod![n(localDeclOpt), t(Do), n(stmtList), t(End)]],

        funcDeclTail => &[
            prod![n(type_), t(Semicolon)],
            prod![t(Void), t(Semicolon)],
        ],

        funcDef => &[prod![n(funcHead), n(funcBody), t(Semicolon)]],

        funcDefList => &[prod![n(funcDef), n(funcDefList)], prod![]],

        funcHead => &[prod![t(Id), n(funcHeadTail)]],

        funcHeadReturn => &[prod![n(type_)], prod![t(Void)]],

        funcHeadTail => &[
            prod![
                t(DoubleColon),
                t(Id),
                t(OpenParen),
                n(fParams),
                t(CloseParen),
                t(Colon),
                n(funcHeadReturn),
            ],
            prod![
                t(OpenParen),
                n(fParams),
                t(CloseParen),
                t(Colon),
                n(funcHeadReturn),
            ],
        ],

        indice => &[prod![t(OpenBracket), n(arithExpr), t(CloseBracket)]],

        localDeclOpt => &[prod![t(Local), n(varDeclList)], prod![]],

        memberDecl => &[
            prod![
                t(Id),
                t(OpenParen),
                n(fParams),
                t(CloseParen),
                t(Colon),
                n(funcDeclTail),
            ],
            prod![n(typeNoId), t(Id), n(varArrayList), t(Semicolon)],
        ],

        multOp => &[prod![t(Multiply)], prod![t(Divide)], prod![t(And)]],

        postfix => &[
            prod![t(OpenParen), n(aParams), t(CloseParen)],
            prod![t(OpenBracket), n(arithExpr), t(CloseBracket)],
            prod![t(Dot), t(Id)],
        ],

        postfixList => &[prod![n(postfix), n(postfixList)], prod![]],

        postfixListNoCall => &[
            prod![n(postfixNoCall), n(postfixListNoCall)],
            prod![],
        ],

        postfixNoCall => &[
            prod![t(OpenBracket), n(arithExpr), t(CloseBracket)],
            prod![t(Dot), t(Id)],
        ],

        // `main`'s body takes the same `;` terminator every other function
        // body does, so a complete program always ends `main do ... end;`.
        prog => &[prod![n(classList), n(funcDefList), t(Main), n(funcBody), t(Semicolon)]],

        relOp => &[
            prod![t(Equal)],
            prod![t(NotEqual)],
            prod![t(LessThan)],
            prod![t(GreaterThan)],
            prod![t(LessEqual)],
            prod![t(GreaterEqual)],
        ],

        sign => &[prod![t(Plus)], prod![t(Minus)]],

        statBlock => &[
            prod![t(Do), n(stmtList), t(End)],
            prod![n(statement)],
            prod![],
        ],

        statement => &[
            prod![t(Id), n(postfixList), n(statementEnd)],
            prod![
                t(If),
                t(OpenParen),
                n(expr),
                t(CloseParen),
                t(Then),
                n(statBlock),
                t(Else),
                n(statBlock),
                t(Semicolon),
            ],
            prod![
                t(While),
                t(OpenParen),
                n(expr),
                t(CloseParen),
                n(statBlock),
                t(Semicolon),
            ],
            prod![
                t(Read),
                t(OpenParen),
                n(variable),
                t(CloseParen),
                t(Semicolon),
            ],
            prod![t(Write), t(OpenParen), n(expr), t(CloseParen), t(Semicolon)],
            prod![t(Return), t(OpenParen), n(expr), t(CloseParen), t(Semicolon)],
        ],

        statementEnd => &[
            prod![n(assignOp), n(expr), t(Semicolon)],
            prod![t(Semicolon)],
        ],

        stmtList => &[prod![n(statement), n(stmtList)], prod![]],

        term => &[prod![n(factor), n(termTail)]],

        termTail => &[prod![n(multOp), n(factor), n(termTail)], prod![]],

        type_ => &[prod![t(Integer)], prod![t(Float)], prod![t(Id)]],

        typeNoId => &[prod![t(Integer)], prod![t(Float)]],

        varArrayList => &[prod![n(arraySize), n(varArrayList)], prod![]],

        varDecl => &[prod![n(type_), t(Id), n(varArrayList), t(Semicolon)]],

        varDeclList => &[prod![n(varDecl), n(varDeclList)], prod![]],

        variable => &[prod![t(Id), n(postfixListNoCall)]],

        visibility => &[prod![t(Public)], prod![t(Private)]],
    }
}

/// Renders a production the way the original grammar dump does: symbols
/// joined by spaces, `EPSILON` for the empty alternative.
pub fn production_to_string(p: Production) -> String {
    if p.is_empty() {
        "EPSILON".to_string()
    } else {
        p.iter().map(Symbol::to_string).collect::<Vec<_>>().join(" ")
    }
}
