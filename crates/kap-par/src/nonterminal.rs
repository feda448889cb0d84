//! The non-terminal alphabet (§3, §4.E): a dense identifier enumeration
//! rather than dispatch polymorphism, so FIRST/FOLLOW/the parse table can be
//! plain [`kap_util::IndexVec`] tables (`SPEC_FULL.md` §9).

use kap_util::Idx;

/// One non-terminal of the grammar. Variant order matches the declaration
/// order below and doubles as each variant's dense index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum NonTerminal {
    START,
    aParams,
    aParamsTail,
    addOp,
    arithExpr,
    arithExprTail,
    arraySize,
    arraySizeTail,
    assignOp,
    classDecl,
    classInheritOpt,
    classInheritTail,
    classList,
    classMemberList,
    expr,
    exprRelTail,
    fParams,
    fParamsArrayList,
    fParamsTail,
    factor,
    funcBody,
    funcDeclTail,
    funcDef,
    funcDefList,
    funcHead,
    funcHeadReturn,
    funcHeadTail,
    indice,
    localDeclOpt,
    memberDecl,
    multOp,
    postfix,
    postfixList,
    postfixListNoCall,
    postfixNoCall,
    prog,
    relOp,
    sign,
    statBlock,
    statement,
    statementEnd,
    stmtList,
    term,
    termTail,
    type_,
    typeNoId,
    varArrayList,
    varDecl,
    varDeclList,
    variable,
    visibility,
}

/// All non-terminals, in the same order as the enum declaration (and
/// therefore indexed identically to [`NonTerminal::index`]).
pub const ALL: [NonTerminal; 51] = [
    NonTerminal::START,
    NonTerminal::aParams,
    NonTerminal::aParamsTail,
    NonTerminal::addOp,
    NonTerminal::arithExpr,
    NonTerminal::arithExprTail,
    NonTerminal::arraySize,
    NonTerminal::arraySizeTail,
    NonTerminal::assignOp,
    NonTerminal::classDecl,
    NonTerminal::classInheritOpt,
    NonTerminal::classInheritTail,
    NonTerminal::classList,
    NonTerminal::classMemberList,
    NonTerminal::expr,
    NonTerminal::exprRelTail,
    NonTerminal::fParams,
    NonTerminal::fParamsArrayList,
    NonTerminal::fParamsTail,
    NonTerminal::factor,
    NonTerminal::funcBody,
    NonTerminal::funcDeclTail,
    NonTerminal::funcDef,
    NonTerminal::funcDefList,
    NonTerminal::funcHead,
    NonTerminal::funcHeadReturn,
    NonTerminal::funcHeadTail,
    NonTerminal::indice,
    NonTerminal::localDeclOpt,
    NonTerminal::memberDecl,
    NonTerminal::multOp,
    NonTerminal::postfix,
    NonTerminal::postfixList,
    NonTerminal::postfixListNoCall,
    NonTerminal::postfixNoCall,
    NonTerminal::prog,
    NonTerminal::relOp,
    NonTerminal::sign,
    NonTerminal::statBlock,
    NonTerminal::statement,
    NonTerminal::statementEnd,
    NonTerminal::stmtList,
    NonTerminal::term,
    NonTerminal::termTail,
    NonTerminal::type_,
    NonTerminal::typeNoId,
    NonTerminal::varArrayList,
    NonTerminal::varDecl,
    NonTerminal::varDeclList,
    NonTerminal::variable,
    NonTerminal::visibility,
];

impl NonTerminal {
    /// The spelling used in diagnostics and the FIRST/FOLLOW dumps (`§6`),
    /// matching the grammar's own identifiers rather than Rust casing.
    pub const fn name(self) -> &'static str {
        use NonTerminal::*;
        match self {
            START => "START",
            aParams => "aParams",
            aParamsTail => "aParamsTail",
            addOp => "addOp",
            arithExpr => "arithExpr",
            arithExprTail => "arithExprTail",
            arraySize => "arraySize",
            arraySizeTail => "arraySizeTail",
            assignOp => "assignOp",
            classDecl => "classDecl",
            classInheritOpt => "classInheritOpt",
            classInheritTail => "classInheritTail",
            classList => "classList",
            classMemberList => "classMemberList",
            expr => "expr",
            exprRelTail => "exprRelTail",
            fParams => "fParams",
            fParamsArrayList => "fParamsArrayList",
            fParamsTail => "fParamsTail",
            factor => "factor",
            funcBody => "funcBody",
            funcDeclTail => "funcDeclTail",
            funcDef => "funcDef",
            funcDefList => "funcDefList",
            funcHead => "funcHead",
            funcHeadReturn => "funcHeadReturn",
            funcHeadTail => "funcHeadTail",
            indice => "indice",
            localDeclOpt => "localDeclOpt",
            memberDecl => "memberDecl",
            multOp => "multOp",
            postfix => "postfix",
            postfixList => "postfixList",
            postfixListNoCall => "postfixListNoCall",
            postfixNoCall => "postfixNoCall",
            prog => "prog",
            relOp => "relOp",
            sign => "sign",
            statBlock => "statBlock",
            statement => "statement",
            statementEnd => "statementEnd",
            stmtList => "stmtList",
            term => "term",
            termTail => "termTail",
            type_ => "type",
            typeNoId => "type_no_id",
            varArrayList => "varArrayList",
            varDecl => "varDecl",
            varDeclList => "varDeclList",
            variable => "variable",
            visibility => "visibility",
        }
    }
}

impl std::fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Idx for NonTerminal {
    fn from_usize(idx: usize) -> Self {
        ALL[idx]
    }

    fn index(self) -> usize {
        self as usize
    }
}
