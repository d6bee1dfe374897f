/// 字句の種類
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,

    // トリビア (構文木には含めない。)
    Space,
    Comment,

    /// 解釈できない文字
    Other,

    Number,
    Str,
    Ident,

    // キーワード
    All,
    And,
    Begin,
    Else,
    Elsif,
    End,
    Endif,
    Exists,
    Exporting,
    False,
    Forall,
    /// AXIOM, LEMMA, THEOREM などの論理式宣言のキーワード
    FormulaKeyword,
    From,
    If,
    Iff,
    Implies,
    Importing,
    In,
    Lambda,
    Let,
    NonemptyType,
    Not,
    Or,
    Then,
    Theory,
    True,
    Type,
    Var,

    // 記号
    /// `&`
    Amp,
    /// `\/`
    BackslashSlash,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `=`
    Equal,
    /// `{`
    LeftBrace,
    /// `[`
    LeftBracket,
    /// `(`
    LeftParen,
    /// `<`
    LeftAngle,
    /// `<=`
    LeftEqual,
    /// `<=>`
    LeftEqualRight,
    /// `-`
    Minus,
    /// `|`
    Pipe,
    /// `+`
    Plus,
    /// `}`
    RightBrace,
    /// `]`
    RightBracket,
    /// `)`
    RightParen,
    /// `>`
    RightAngle,
    /// `>=`
    RightEqual,
    /// `=>`
    RightFatArrow,
    /// `->`
    RightSlimArrow,
    /// `;`
    Semi,
    /// `/`
    Slash,
    /// `/\`
    SlashBackslash,
    /// `/=`
    SlashEqual,
    /// `*`
    Star,
    /// `~`
    Tilde,
}

impl TokenKind {
    pub(crate) fn is_trivia(self) -> bool {
        match self {
            TokenKind::Space | TokenKind::Comment => true,
            _ => false,
        }
    }

    /// エラーメッセージの "expecting ..." に書く名前
    pub(crate) fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "<EOF>",
            TokenKind::Space => "WS",
            TokenKind::Comment => "COMMENT",
            TokenKind::Other => "UNKNOWN",
            TokenKind::Number => "NUMBER",
            TokenKind::Str => "STRING",
            TokenKind::Ident => "IDENTIFIER",
            TokenKind::All => "'ALL'",
            TokenKind::And => "'AND'",
            TokenKind::Begin => "'BEGIN'",
            TokenKind::Else => "'ELSE'",
            TokenKind::Elsif => "'ELSIF'",
            TokenKind::End => "'END'",
            TokenKind::Endif => "'ENDIF'",
            TokenKind::Exists => "'EXISTS'",
            TokenKind::Exporting => "'EXPORTING'",
            TokenKind::False => "'FALSE'",
            TokenKind::Forall => "'FORALL'",
            TokenKind::FormulaKeyword => "FORMULA_NAME",
            TokenKind::From => "'FROM'",
            TokenKind::If => "'IF'",
            TokenKind::Iff => "'IFF'",
            TokenKind::Implies => "'IMPLIES'",
            TokenKind::Importing => "'IMPORTING'",
            TokenKind::In => "'IN'",
            TokenKind::Lambda => "'LAMBDA'",
            TokenKind::Let => "'LET'",
            TokenKind::NonemptyType => "'NONEMPTY_TYPE'",
            TokenKind::Not => "'NOT'",
            TokenKind::Or => "'OR'",
            TokenKind::Then => "'THEN'",
            TokenKind::Theory => "'THEORY'",
            TokenKind::True => "'TRUE'",
            TokenKind::Type => "'TYPE'",
            TokenKind::Var => "'VAR'",
            TokenKind::Amp => "'&'",
            TokenKind::BackslashSlash => "'\\/'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::Dot => "'.'",
            TokenKind::Equal => "'='",
            TokenKind::LeftBrace => "'{'",
            TokenKind::LeftBracket => "'['",
            TokenKind::LeftParen => "'('",
            TokenKind::LeftAngle => "'<'",
            TokenKind::LeftEqual => "'<='",
            TokenKind::LeftEqualRight => "'<=>'",
            TokenKind::Minus => "'-'",
            TokenKind::Pipe => "'|'",
            TokenKind::Plus => "'+'",
            TokenKind::RightBrace => "'}'",
            TokenKind::RightBracket => "']'",
            TokenKind::RightParen => "')'",
            TokenKind::RightAngle => "'>'",
            TokenKind::RightEqual => "'>='",
            TokenKind::RightFatArrow => "'=>'",
            TokenKind::RightSlimArrow => "'->'",
            TokenKind::Semi => "';'",
            TokenKind::Slash => "'/'",
            TokenKind::SlashBackslash => "'/\\'",
            TokenKind::SlashEqual => "'/='",
            TokenKind::Star => "'*'",
            TokenKind::Tilde => "'~'",
        }
    }
}
