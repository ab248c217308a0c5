//! Code to rune tables of the predefined simple encodings.

/// `/StandardEncoding`, 149 entries.
pub(crate) const STANDARD_ENCODING: &[(u8, char)] = &[
    (0x20, '\u{0020}'), // space
    (0x21, '\u{0021}'), // exclam
    (0x22, '\u{0022}'), // quotedbl
    (0x23, '\u{0023}'), // numbersign
    (0x24, '\u{0024}'), // dollar
    (0x25, '\u{0025}'), // percent
    (0x26, '\u{0026}'), // ampersand
    (0x27, '\u{2019}'), // quoteright
    (0x28, '\u{0028}'), // parenleft
    (0x29, '\u{0029}'), // parenright
    (0x2a, '\u{002a}'), // asterisk
    (0x2b, '\u{002b}'), // plus
    (0x2c, '\u{002c}'), // comma
    (0x2d, '\u{002d}'), // hyphen
    (0x2e, '\u{002e}'), // period
    (0x2f, '\u{002f}'), // slash
    (0x30, '\u{0030}'), // zero
    (0x31, '\u{0031}'), // one
    (0x32, '\u{0032}'), // two
    (0x33, '\u{0033}'), // three
    (0x34, '\u{0034}'), // four
    (0x35, '\u{0035}'), // five
    (0x36, '\u{0036}'), // six
    (0x37, '\u{0037}'), // seven
    (0x38, '\u{0038}'), // eight
    (0x39, '\u{0039}'), // nine
    (0x3a, '\u{003a}'), // colon
    (0x3b, '\u{003b}'), // semicolon
    (0x3c, '\u{003c}'), // less
    (0x3d, '\u{003d}'), // equal
    (0x3e, '\u{003e}'), // greater
    (0x3f, '\u{003f}'), // question
    (0x40, '\u{0040}'), // at
    (0x41, '\u{0041}'), // A
    (0x42, '\u{0042}'), // B
    (0x43, '\u{0043}'), // C
    (0x44, '\u{0044}'), // D
    (0x45, '\u{0045}'), // E
    (0x46, '\u{0046}'), // F
    (0x47, '\u{0047}'), // G
    (0x48, '\u{0048}'), // H
    (0x49, '\u{0049}'), // I
    (0x4a, '\u{004a}'), // J
    (0x4b, '\u{004b}'), // K
    (0x4c, '\u{004c}'), // L
    (0x4d, '\u{004d}'), // M
    (0x4e, '\u{004e}'), // N
    (0x4f, '\u{004f}'), // O
    (0x50, '\u{0050}'), // P
    (0x51, '\u{0051}'), // Q
    (0x52, '\u{0052}'), // R
    (0x53, '\u{0053}'), // S
    (0x54, '\u{0054}'), // T
    (0x55, '\u{0055}'), // U
    (0x56, '\u{0056}'), // V
    (0x57, '\u{0057}'), // W
    (0x58, '\u{0058}'), // X
    (0x59, '\u{0059}'), // Y
    (0x5a, '\u{005a}'), // Z
    (0x5b, '\u{005b}'), // bracketleft
    (0x5c, '\u{005c}'), // backslash
    (0x5d, '\u{005d}'), // bracketright
    (0x5e, '\u{005e}'), // asciicircum
    (0x5f, '\u{005f}'), // underscore
    (0x60, '\u{0060}'), // grave
    (0x61, '\u{0061}'), // a
    (0x62, '\u{0062}'), // b
    (0x63, '\u{0063}'), // c
    (0x64, '\u{0064}'), // d
    (0x65, '\u{0065}'), // e
    (0x66, '\u{0066}'), // f
    (0x67, '\u{0067}'), // g
    (0x68, '\u{0068}'), // h
    (0x69, '\u{0069}'), // i
    (0x6a, '\u{006a}'), // j
    (0x6b, '\u{006b}'), // k
    (0x6c, '\u{006c}'), // l
    (0x6d, '\u{006d}'), // m
    (0x6e, '\u{006e}'), // n
    (0x6f, '\u{006f}'), // o
    (0x70, '\u{0070}'), // p
    (0x71, '\u{0071}'), // q
    (0x72, '\u{0072}'), // r
    (0x73, '\u{0073}'), // s
    (0x74, '\u{0074}'), // t
    (0x75, '\u{0075}'), // u
    (0x76, '\u{0076}'), // v
    (0x77, '\u{0077}'), // w
    (0x78, '\u{0078}'), // x
    (0x79, '\u{0079}'), // y
    (0x7a, '\u{007a}'), // z
    (0x7b, '\u{007b}'), // braceleft
    (0x7c, '\u{007c}'), // bar
    (0x7d, '\u{007d}'), // braceright
    (0x7e, '\u{007e}'), // asciitilde
    (0xa1, '\u{00a1}'), // exclamdown
    (0xa2, '\u{00a2}'), // cent
    (0xa3, '\u{00a3}'), // sterling
    (0xa4, '\u{2044}'), // fraction
    (0xa5, '\u{00a5}'), // yen
    (0xa6, '\u{0192}'), // florin
    (0xa7, '\u{00a7}'), // section
    (0xa8, '\u{00a4}'), // currency
    (0xa9, '\u{0027}'), // quotesingle
    (0xaa, '\u{201c}'), // quotedblleft
    (0xab, '\u{00ab}'), // guillemotleft
    (0xac, '\u{2039}'), // guilsinglleft
    (0xad, '\u{203a}'), // guilsinglright
    (0xae, '\u{fb01}'), // fi
    (0xaf, '\u{fb02}'), // fl
    (0xb1, '\u{2013}'), // endash
    (0xb2, '\u{2020}'), // dagger
    (0xb3, '\u{2021}'), // daggerdbl
    (0xb4, '\u{00b7}'), // middot
    (0xb6, '\u{00b6}'), // paragraph
    (0xb7, '\u{2022}'), // bullet
    (0xb8, '\u{201a}'), // quotesinglbase
    (0xb9, '\u{201e}'), // quotedblbase
    (0xba, '\u{201d}'), // quotedblright
    (0xbb, '\u{00bb}'), // guillemotright
    (0xbc, '\u{2026}'), // ellipsis
    (0xbd, '\u{2030}'), // perthousand
    (0xbf, '\u{00bf}'), // questiondown
    (0xc1, '\u{0060}'), // grave
    (0xc2, '\u{00b4}'), // acute
    (0xc3, '\u{02c6}'), // circumflex
    (0xc4, '\u{02dc}'), // ilde
    (0xc5, '\u{00af}'), // macron
    (0xc6, '\u{02d8}'), // breve
    (0xc7, '\u{02d9}'), // dotaccent
    (0xc8, '\u{00a8}'), // dieresis
    (0xca, '\u{02da}'), // ring
    (0xcb, '\u{00b8}'), // cedilla
    (0xcc, '\u{02dd}'), // hungarumlaut
    (0xcd, '\u{02db}'), // ogonek
    (0xce, '\u{02c7}'), // caron
    (0xcf, '\u{2014}'), // emdash
    (0xe0, '\u{00c6}'), // AE
    (0xe2, '\u{00aa}'), // ordfeminine
    (0xe7, '\u{0141}'), // Lslash
    (0xe8, '\u{00d8}'), // Oslash
    (0xe9, '\u{0152}'), // OE
    (0xea, '\u{00ba}'), // ordmasculine
    (0xf0, '\u{00e6}'), // ae
    (0xf5, '\u{0131}'), // dotlessi
    (0xf7, '\u{0142}'), // lslash
    (0xf8, '\u{00f8}'), // oslash
    (0xf9, '\u{0153}'), // oe
    (0xfa, '\u{00df}'), // germandbls
];

/// `/MacRomanEncoding`, 255 entries.
pub(crate) const MAC_ROMAN_ENCODING: &[(u8, char)] = &[
    (0x01, '\u{0001}'), // controlSTX
    (0x02, '\u{0002}'), // controlSOT
    (0x03, '\u{0003}'), // controlETX
    (0x04, '\u{0004}'), // controlEOT
    (0x05, '\u{0005}'), // controlENQ
    (0x06, '\u{0006}'), // controlACK
    (0x07, '\u{0007}'), // controlBEL
    (0x08, '\u{0008}'), // controlBS
    (0x09, '\u{0009}'), // controlHT
    (0x0a, '\u{000a}'), // controlLF
    (0x0b, '\u{000b}'), // controlVT
    (0x0c, '\u{000c}'), // controlFF
    (0x0d, '\u{000d}'), // controlCR
    (0x0e, '\u{000e}'), // controlSO
    (0x0f, '\u{000f}'), // controlSI
    (0x10, '\u{0010}'), // controlDLE
    (0x11, '\u{0011}'), // controlDC1
    (0x12, '\u{0012}'), // controlDC2
    (0x13, '\u{0013}'), // controlDC3
    (0x14, '\u{0014}'), // controlDC4
    (0x15, '\u{0015}'), // controlNAK
    (0x16, '\u{0016}'), // controlSYN
    (0x17, '\u{0017}'), // controlETB
    (0x18, '\u{0018}'), // controlCAN
    (0x19, '\u{0019}'), // controlEM
    (0x1a, '\u{001a}'), // controlSUB
    (0x1b, '\u{001b}'), // controlESC
    (0x1c, '\u{001c}'), // controlFS
    (0x1d, '\u{001d}'), // controlGS
    (0x1e, '\u{001e}'), // controlRS
    (0x1f, '\u{001f}'), // controlUS
    (0x20, '\u{0020}'), // space
    (0x21, '\u{0021}'), // exclam
    (0x22, '\u{0022}'), // quotedbl
    (0x23, '\u{0023}'), // numbersign
    (0x24, '\u{0024}'), // dollar
    (0x25, '\u{0025}'), // percent
    (0x26, '\u{0026}'), // ampersand
    (0x27, '\u{0027}'), // quotesingle
    (0x28, '\u{0028}'), // parenleft
    (0x29, '\u{0029}'), // parenright
    (0x2a, '\u{002a}'), // asterisk
    (0x2b, '\u{002b}'), // plus
    (0x2c, '\u{002c}'), // comma
    (0x2d, '\u{002d}'), // hyphen
    (0x2e, '\u{002e}'), // period
    (0x2f, '\u{002f}'), // slash
    (0x30, '\u{0030}'), // zero
    (0x31, '\u{0031}'), // one
    (0x32, '\u{0032}'), // two
    (0x33, '\u{0033}'), // three
    (0x34, '\u{0034}'), // four
    (0x35, '\u{0035}'), // five
    (0x36, '\u{0036}'), // six
    (0x37, '\u{0037}'), // seven
    (0x38, '\u{0038}'), // eight
    (0x39, '\u{0039}'), // nine
    (0x3a, '\u{003a}'), // colon
    (0x3b, '\u{003b}'), // semicolon
    (0x3c, '\u{003c}'), // less
    (0x3d, '\u{003d}'), // equal
    (0x3e, '\u{003e}'), // greater
    (0x3f, '\u{003f}'), // question
    (0x40, '\u{0040}'), // at
    (0x41, '\u{0041}'), // A
    (0x42, '\u{0042}'), // B
    (0x43, '\u{0043}'), // C
    (0x44, '\u{0044}'), // D
    (0x45, '\u{0045}'), // E
    (0x46, '\u{0046}'), // F
    (0x47, '\u{0047}'), // G
    (0x48, '\u{0048}'), // H
    (0x49, '\u{0049}'), // I
    (0x4a, '\u{004a}'), // J
    (0x4b, '\u{004b}'), // K
    (0x4c, '\u{004c}'), // L
    (0x4d, '\u{004d}'), // M
    (0x4e, '\u{004e}'), // N
    (0x4f, '\u{004f}'), // O
    (0x50, '\u{0050}'), // P
    (0x51, '\u{0051}'), // Q
    (0x52, '\u{0052}'), // R
    (0x53, '\u{0053}'), // S
    (0x54, '\u{0054}'), // T
    (0x55, '\u{0055}'), // U
    (0x56, '\u{0056}'), // V
    (0x57, '\u{0057}'), // W
    (0x58, '\u{0058}'), // X
    (0x59, '\u{0059}'), // Y
    (0x5a, '\u{005a}'), // Z
    (0x5b, '\u{005b}'), // bracketleft
    (0x5c, '\u{005c}'), // backslash
    (0x5d, '\u{005d}'), // bracketright
    (0x5e, '\u{005e}'), // asciicircum
    (0x5f, '\u{005f}'), // underscore
    (0x60, '\u{0060}'), // grave
    (0x61, '\u{0061}'), // a
    (0x62, '\u{0062}'), // b
    (0x63, '\u{0063}'), // c
    (0x64, '\u{0064}'), // d
    (0x65, '\u{0065}'), // e
    (0x66, '\u{0066}'), // f
    (0x67, '\u{0067}'), // g
    (0x68, '\u{0068}'), // h
    (0x69, '\u{0069}'), // i
    (0x6a, '\u{006a}'), // j
    (0x6b, '\u{006b}'), // k
    (0x6c, '\u{006c}'), // l
    (0x6d, '\u{006d}'), // m
    (0x6e, '\u{006e}'), // n
    (0x6f, '\u{006f}'), // o
    (0x70, '\u{0070}'), // p
    (0x71, '\u{0071}'), // q
    (0x72, '\u{0072}'), // r
    (0x73, '\u{0073}'), // s
    (0x74, '\u{0074}'), // t
    (0x75, '\u{0075}'), // u
    (0x76, '\u{0076}'), // v
    (0x77, '\u{0077}'), // w
    (0x78, '\u{0078}'), // x
    (0x79, '\u{0079}'), // y
    (0x7a, '\u{007a}'), // z
    (0x7b, '\u{007b}'), // braceleft
    (0x7c, '\u{007c}'), // bar
    (0x7d, '\u{007d}'), // braceright
    (0x7e, '\u{007e}'), // asciitilde
    (0x7f, '\u{007f}'), // controlDEL
    (0x80, '\u{00c4}'), // Adieresis
    (0x81, '\u{00c5}'), // Aring
    (0x82, '\u{00c7}'), // Ccedilla
    (0x83, '\u{00c9}'), // Eacute
    (0x84, '\u{00d1}'), // Ntilde
    (0x85, '\u{00d6}'), // Odieresis
    (0x86, '\u{00dc}'), // Udieresis
    (0x87, '\u{00e1}'), // aacute
    (0x88, '\u{00e0}'), // agrave
    (0x89, '\u{00e2}'), // acircumflex
    (0x8a, '\u{00e4}'), // adieresis
    (0x8b, '\u{00e3}'), // atilde
    (0x8c, '\u{00e5}'), // aring
    (0x8d, '\u{00e7}'), // ccedilla
    (0x8e, '\u{00e9}'), // eacute
    (0x8f, '\u{00e8}'), // egrave
    (0x90, '\u{00ea}'), // ecircumflex
    (0x91, '\u{00eb}'), // edieresis
    (0x92, '\u{00ed}'), // iacute
    (0x93, '\u{00ec}'), // igrave
    (0x94, '\u{00ee}'), // icircumflex
    (0x95, '\u{00ef}'), // idieresis
    (0x96, '\u{00f1}'), // ntilde
    (0x97, '\u{00f3}'), // oacute
    (0x98, '\u{00f2}'), // ograve
    (0x99, '\u{00f4}'), // ocircumflex
    (0x9a, '\u{00f6}'), // odieresis
    (0x9b, '\u{00f5}'), // otilde
    (0x9c, '\u{00fa}'), // uacute
    (0x9d, '\u{00f9}'), // ugrave
    (0x9e, '\u{00fb}'), // ucircumflex
    (0x9f, '\u{00fc}'), // udieresis
    (0xa0, '\u{2020}'), // dagger
    (0xa1, '\u{00b0}'), // degree
    (0xa2, '\u{00a2}'), // cent
    (0xa3, '\u{00a3}'), // sterling
    (0xa4, '\u{00a7}'), // section
    (0xa5, '\u{2022}'), // bullet
    (0xa6, '\u{00b6}'), // paragraph
    (0xa7, '\u{00df}'), // germandbls
    (0xa8, '\u{00ae}'), // registered
    (0xa9, '\u{00a9}'), // copyright
    (0xaa, '\u{2122}'), // trademark
    (0xab, '\u{00b4}'), // acute
    (0xac, '\u{00a8}'), // dieresis
    (0xad, '\u{2260}'), // notequal
    (0xae, '\u{00c6}'), // AE
    (0xaf, '\u{00d8}'), // Oslash
    (0xb0, '\u{221e}'), // infinity
    (0xb1, '\u{00b1}'), // plusminus
    (0xb2, '\u{2264}'), // lessequal
    (0xb3, '\u{2265}'), // greaterequal
    (0xb4, '\u{00a5}'), // yen
    (0xb5, '\u{00b5}'), // mu
    (0xb6, '\u{2202}'), // partialdiff
    (0xb7, '\u{2211}'), // summation
    (0xb8, '\u{220f}'), // product
    (0xb9, '\u{03c0}'), // pi
    (0xba, '\u{222b}'), // integral
    (0xbb, '\u{00aa}'), // ordfeminine
    (0xbc, '\u{00ba}'), // ordmasculine
    (0xbd, '\u{03a9}'), // Omegagreek
    (0xbe, '\u{00e6}'), // ae
    (0xbf, '\u{00f8}'), // oslash
    (0xc0, '\u{00bf}'), // questiondown
    (0xc1, '\u{00a1}'), // exclamdown
    (0xc2, '\u{00ac}'), // logicalnot
    (0xc3, '\u{221a}'), // radical
    (0xc4, '\u{0192}'), // florin
    (0xc5, '\u{2248}'), // approxequal
    (0xc6, '\u{2206}'), // Delta
    (0xc7, '\u{00ab}'), // guillemotleft
    (0xc8, '\u{00bb}'), // guillemotright
    (0xc9, '\u{2026}'), // ellipsis
    (0xca, '\u{00a0}'), // nbspace
    (0xcb, '\u{00c0}'), // Agrave
    (0xcc, '\u{00c3}'), // Atilde
    (0xcd, '\u{00d5}'), // Otilde
    (0xce, '\u{0152}'), // OE
    (0xcf, '\u{0153}'), // oe
    (0xd0, '\u{2013}'), // endash
    (0xd1, '\u{2014}'), // emdash
    (0xd2, '\u{201c}'), // quotedblleft
    (0xd3, '\u{201d}'), // quotedblright
    (0xd4, '\u{2018}'), // quoteleft
    (0xd5, '\u{2019}'), // quoteright
    (0xd6, '\u{00f7}'), // divide
    (0xd7, '\u{25ca}'), // lozenge
    (0xd8, '\u{00ff}'), // ydieresis
    (0xd9, '\u{0178}'), // Ydieresis
    (0xda, '\u{2044}'), // fraction
    (0xdb, '\u{20ac}'), // Euro
    (0xdc, '\u{2039}'), // guilsinglleft
    (0xdd, '\u{203a}'), // guilsinglright
    (0xde, '\u{fb01}'), // fi
    (0xdf, '\u{fb02}'), // fl
    (0xe0, '\u{2021}'), // daggerdbl
    (0xe1, '\u{00b7}'), // middot
    (0xe2, '\u{201a}'), // quotesinglbase
    (0xe3, '\u{201e}'), // quotedblbase
    (0xe4, '\u{2030}'), // perthousand
    (0xe5, '\u{00c2}'), // Acircumflex
    (0xe6, '\u{00ca}'), // Ecircumflex
    (0xe7, '\u{00c1}'), // Aacute
    (0xe8, '\u{00cb}'), // Edieresis
    (0xe9, '\u{00c8}'), // Egrave
    (0xea, '\u{00cd}'), // Iacute
    (0xeb, '\u{00ce}'), // Icircumflex
    (0xec, '\u{00cf}'), // Idieresis
    (0xed, '\u{00cc}'), // Igrave
    (0xee, '\u{00d3}'), // Oacute
    (0xef, '\u{00d4}'), // Ocircumflex
    (0xf0, '\u{f8ff}'), // apple
    (0xf1, '\u{00d2}'), // Ograve
    (0xf2, '\u{00da}'), // Uacute
    (0xf3, '\u{00db}'), // Ucircumflex
    (0xf4, '\u{00d9}'), // Ugrave
    (0xf5, '\u{0131}'), // dotlessi
    (0xf6, '\u{02c6}'), // circumflex
    (0xf7, '\u{02dc}'), // ilde
    (0xf8, '\u{00af}'), // macron
    (0xf9, '\u{02d8}'), // breve
    (0xfa, '\u{02d9}'), // dotaccent
    (0xfb, '\u{02da}'), // ring
    (0xfc, '\u{00b8}'), // cedilla
    (0xfd, '\u{02dd}'), // hungarumlaut
    (0xfe, '\u{02db}'), // ogonek
    (0xff, '\u{02c7}'), // caron
];

/// `/MacExpertEncoding`, 165 entries.
pub(crate) const MAC_EXPERT_ENCODING: &[(u8, char)] = &[
    (0x20, '\u{0020}'), // space
    (0x21, '\u{f721}'), // exclamsmall
    (0x22, '\u{f6f8}'), // Hungarumlautsmall
    (0x23, '\u{f7a2}'), // centoldstyle
    (0x24, '\u{f724}'), // dollaroldstyle
    (0x25, '\u{f6e4}'), // dollarsuperior
    (0x26, '\u{f726}'), // ampersandsmall
    (0x27, '\u{f7b4}'), // Acutesmall
    (0x28, '\u{207d}'), // parenleftsuperior
    (0x29, '\u{207e}'), // parenrightsuperior
    (0x2a, '\u{2025}'), // twodotenleader
    (0x2b, '\u{2024}'), // onedotenleader
    (0x2c, '\u{002c}'), // comma
    (0x2d, '\u{002d}'), // hyphen
    (0x2e, '\u{002e}'), // period
    (0x2f, '\u{2044}'), // fraction
    (0x30, '\u{f730}'), // zerooldstyle
    (0x31, '\u{f731}'), // oneoldstyle
    (0x32, '\u{f732}'), // twooldstyle
    (0x33, '\u{f733}'), // threeoldstyle
    (0x34, '\u{f734}'), // fouroldstyle
    (0x35, '\u{f735}'), // fiveoldstyle
    (0x36, '\u{f736}'), // sixoldstyle
    (0x37, '\u{f737}'), // sevenoldstyle
    (0x38, '\u{f738}'), // eightoldstyle
    (0x39, '\u{f739}'), // nineoldstyle
    (0x3a, '\u{003a}'), // colon
    (0x3b, '\u{003b}'), // semicolon
    (0x3d, '\u{f6de}'), // threequartersemdash
    (0x3f, '\u{f73f}'), // questionsmall
    (0x44, '\u{f7f0}'), // Ethsmall
    (0x47, '\u{00bc}'), // onequarter
    (0x48, '\u{00bd}'), // onehalf
    (0x49, '\u{00be}'), // threequarters
    (0x4a, '\u{215b}'), // oneeighth
    (0x4b, '\u{215c}'), // threeeighths
    (0x4c, '\u{215d}'), // fiveeighths
    (0x4d, '\u{215e}'), // seveneighths
    (0x4e, '\u{2153}'), // onethird
    (0x4f, '\u{2154}'), // twothirds
    (0x56, '\u{fb00}'), // ff
    (0x57, '\u{fb01}'), // fi
    (0x58, '\u{fb02}'), // fl
    (0x59, '\u{fb03}'), // ffi
    (0x5a, '\u{fb04}'), // ffl
    (0x5b, '\u{208d}'), // parenleftinferior
    (0x5d, '\u{208e}'), // parenrightinferior
    (0x5e, '\u{f6f6}'), // Circumflexsmall
    (0x5f, '\u{f6e5}'), // hypheninferior
    (0x60, '\u{f760}'), // Gravesmall
    (0x61, '\u{f761}'), // Asmall
    (0x62, '\u{f762}'), // Bsmall
    (0x63, '\u{f763}'), // Csmall
    (0x64, '\u{f764}'), // Dsmall
    (0x65, '\u{f765}'), // Esmall
    (0x66, '\u{f766}'), // Fsmall
    (0x67, '\u{f767}'), // Gsmall
    (0x68, '\u{f768}'), // Hsmall
    (0x69, '\u{f769}'), // Ismall
    (0x6a, '\u{f76a}'), // Jsmall
    (0x6b, '\u{f76b}'), // Ksmall
    (0x6c, '\u{f76c}'), // Lsmall
    (0x6d, '\u{f76d}'), // Msmall
    (0x6e, '\u{f76e}'), // Nsmall
    (0x6f, '\u{f76f}'), // Osmall
    (0x70, '\u{f770}'), // Psmall
    (0x71, '\u{f771}'), // Qsmall
    (0x72, '\u{f772}'), // Rsmall
    (0x73, '\u{f773}'), // Ssmall
    (0x74, '\u{f774}'), // Tsmall
    (0x75, '\u{f775}'), // Usmall
    (0x76, '\u{f776}'), // Vsmall
    (0x77, '\u{f777}'), // Wsmall
    (0x78, '\u{f778}'), // Xsmall
    (0x79, '\u{f779}'), // Ysmall
    (0x7a, '\u{f77a}'), // Zsmall
    (0x7b, '\u{20a1}'), // colonmonetary
    (0x7c, '\u{f6dc}'), // onefitted
    (0x7d, '\u{f6dd}'), // rupiah
    (0x7e, '\u{f6fe}'), // Tildesmall
    (0x81, '\u{f6e9}'), // asuperior
    (0x82, '\u{f6e0}'), // centsuperior
    (0x87, '\u{f7e1}'), // Aacutesmall
    (0x88, '\u{f7e0}'), // Agravesmall
    (0x89, '\u{f7e2}'), // Acircumflexsmall
    (0x8a, '\u{f7e4}'), // Adieresissmall
    (0x8b, '\u{f7e3}'), // Atildesmall
    (0x8c, '\u{f7e5}'), // Aringsmall
    (0x8d, '\u{f7e7}'), // Ccedillasmall
    (0x8e, '\u{f7e9}'), // Eacutesmall
    (0x8f, '\u{f7e8}'), // Egravesmall
    (0x90, '\u{f7ea}'), // Ecircumflexsmall
    (0x91, '\u{f7eb}'), // Edieresissmall
    (0x92, '\u{f7ed}'), // Iacutesmall
    (0x93, '\u{f7ec}'), // Igravesmall
    (0x94, '\u{f7ee}'), // Icircumflexsmall
    (0x95, '\u{f7ef}'), // Idieresissmall
    (0x96, '\u{f7f1}'), // Ntildesmall
    (0x97, '\u{f7f3}'), // Oacutesmall
    (0x98, '\u{f7f2}'), // Ogravesmall
    (0x99, '\u{f7f4}'), // Ocircumflexsmall
    (0x9a, '\u{f7f6}'), // Odieresissmall
    (0x9b, '\u{f7f5}'), // Otildesmall
    (0x9c, '\u{f7fa}'), // Uacutesmall
    (0x9d, '\u{f7f9}'), // Ugravesmall
    (0x9e, '\u{f7fb}'), // Ucircumflexsmall
    (0x9f, '\u{f7fc}'), // Udieresissmall
    (0xa1, '\u{2078}'), // eightsuperior
    (0xa2, '\u{2084}'), // fourinferior
    (0xa3, '\u{2083}'), // threeinferior
    (0xa4, '\u{2086}'), // sixinferior
    (0xa5, '\u{2088}'), // eightinferior
    (0xa6, '\u{2087}'), // seveninferior
    (0xa7, '\u{f6fd}'), // Scaronsmall
    (0xa9, '\u{f6df}'), // centinferior
    (0xaa, '\u{2082}'), // twoinferior
    (0xac, '\u{f7a8}'), // Dieresissmall
    (0xae, '\u{f6f5}'), // Caronsmall
    (0xaf, '\u{f6f0}'), // osuperior
    (0xb0, '\u{2085}'), // fiveinferior
    (0xb2, '\u{f6e1}'), // commainferior
    (0xb3, '\u{f6e7}'), // periodinferior
    (0xb4, '\u{f7fd}'), // Yacutesmall
    (0xb6, '\u{f6e3}'), // dollarinferior
    (0xb9, '\u{f7fe}'), // Thornsmall
    (0xbb, '\u{2089}'), // nineinferior
    (0xbc, '\u{2080}'), // zeroinferior
    (0xbd, '\u{f6ff}'), // Zcaronsmall
    (0xbe, '\u{f7e6}'), // AEsmall
    (0xbf, '\u{f7f8}'), // Oslashsmall
    (0xc0, '\u{f7bf}'), // questiondownsmall
    (0xc1, '\u{2081}'), // oneinferior
    (0xc2, '\u{f6f9}'), // Lslashsmall
    (0xc9, '\u{f7b8}'), // Cedillasmall
    (0xcf, '\u{f6fa}'), // OEsmall
    (0xd0, '\u{2012}'), // figuredash
    (0xd1, '\u{f6e6}'), // hyphensuperior
    (0xd6, '\u{f7a1}'), // exclamdownsmall
    (0xd8, '\u{f7ff}'), // Ydieresissmall
    (0xda, '\u{00b9}'), // onesuperior
    (0xdb, '\u{00b2}'), // twosuperior
    (0xdc, '\u{00b3}'), // threesuperior
    (0xdd, '\u{2074}'), // foursuperior
    (0xde, '\u{2075}'), // fivesuperior
    (0xdf, '\u{2076}'), // sixsuperior
    (0xe0, '\u{2077}'), // sevensuperior
    (0xe1, '\u{2079}'), // ninesuperior
    (0xe2, '\u{2070}'), // zerosuperior
    (0xe4, '\u{f6ec}'), // esuperior
    (0xe5, '\u{f6f1}'), // rsuperior
    (0xe6, '\u{f6f3}'), // tsuperior
    (0xe9, '\u{f6ed}'), // isuperior
    (0xea, '\u{f6f2}'), // ssuperior
    (0xeb, '\u{f6eb}'), // dsuperior
    (0xf1, '\u{f6ee}'), // lsuperior
    (0xf2, '\u{f6fb}'), // Ogoneksmall
    (0xf3, '\u{f6f4}'), // Brevesmall
    (0xf4, '\u{f7af}'), // Macronsmall
    (0xf5, '\u{f6ea}'), // bsuperior
    (0xf6, '\u{207f}'), // nsuperior
    (0xf7, '\u{f6ef}'), // msuperior
    (0xf8, '\u{f6e2}'), // commasuperior
    (0xf9, '\u{f6e8}'), // periodsuperior
    (0xfa, '\u{f6f7}'), // Dotaccentsmall
    (0xfb, '\u{f6fc}'), // Ringsmall
];

/// `/PdfDocEncoding`, 252 entries.
pub(crate) const PDF_DOC_ENCODING: &[(u8, char)] = &[
    (0x01, '\u{0001}'), // controlSTX
    (0x02, '\u{0002}'), // controlSOT
    (0x03, '\u{0003}'), // controlETX
    (0x04, '\u{0004}'), // controlEOT
    (0x05, '\u{0005}'), // controlENQ
    (0x06, '\u{0006}'), // controlACK
    (0x07, '\u{0007}'), // controlBEL
    (0x08, '\u{0008}'), // controlBS
    (0x09, '\u{0009}'), // controlHT
    (0x0a, '\u{000a}'), // controlLF
    (0x0b, '\u{000b}'), // controlVT
    (0x0c, '\u{000c}'), // controlFF
    (0x0d, '\u{000d}'), // controlCR
    (0x0e, '\u{000e}'), // controlSO
    (0x0f, '\u{000f}'), // controlSI
    (0x10, '\u{0010}'), // controlDLE
    (0x11, '\u{0011}'), // controlDC1
    (0x12, '\u{0012}'), // controlDC2
    (0x13, '\u{0013}'), // controlDC3
    (0x14, '\u{0014}'), // controlDC4
    (0x15, '\u{0015}'), // controlNAK
    (0x16, '\u{0017}'), // controlETB
    (0x17, '\u{0017}'), // controlETB
    (0x18, '\u{02d8}'), // breve
    (0x19, '\u{02c7}'), // caron
    (0x1a, '\u{02c6}'), // circumflex
    (0x1b, '\u{02d9}'), // dotaccent
    (0x1c, '\u{02dd}'), // hungarumlaut
    (0x1d, '\u{02db}'), // ogonek
    (0x1e, '\u{02da}'), // ring
    (0x1f, '\u{02dc}'), // ilde
    (0x20, '\u{0020}'), // space
    (0x21, '\u{0021}'), // exclam
    (0x22, '\u{0022}'), // quotedbl
    (0x23, '\u{0023}'), // numbersign
    (0x24, '\u{0024}'), // dollar
    (0x25, '\u{0025}'), // percent
    (0x26, '\u{0026}'), // ampersand
    (0x27, '\u{0027}'), // quotesingle
    (0x28, '\u{0028}'), // parenleft
    (0x29, '\u{0029}'), // parenright
    (0x2a, '\u{002a}'), // asterisk
    (0x2b, '\u{002b}'), // plus
    (0x2c, '\u{002c}'), // comma
    (0x2d, '\u{002d}'), // hyphen
    (0x2e, '\u{002e}'), // period
    (0x2f, '\u{002f}'), // slash
    (0x30, '\u{0030}'), // zero
    (0x31, '\u{0031}'), // one
    (0x32, '\u{0032}'), // two
    (0x33, '\u{0033}'), // three
    (0x34, '\u{0034}'), // four
    (0x35, '\u{0035}'), // five
    (0x36, '\u{0036}'), // six
    (0x37, '\u{0037}'), // seven
    (0x38, '\u{0038}'), // eight
    (0x39, '\u{0039}'), // nine
    (0x3a, '\u{003a}'), // colon
    (0x3b, '\u{003b}'), // semicolon
    (0x3c, '\u{003c}'), // less
    (0x3d, '\u{003d}'), // equal
    (0x3e, '\u{003e}'), // greater
    (0x3f, '\u{003f}'), // question
    (0x40, '\u{0040}'), // at
    (0x41, '\u{0041}'), // A
    (0x42, '\u{0042}'), // B
    (0x43, '\u{0043}'), // C
    (0x44, '\u{0044}'), // D
    (0x45, '\u{0045}'), // E
    (0x46, '\u{0046}'), // F
    (0x47, '\u{0047}'), // G
    (0x48, '\u{0048}'), // H
    (0x49, '\u{0049}'), // I
    (0x4a, '\u{004a}'), // J
    (0x4b, '\u{004b}'), // K
    (0x4c, '\u{004c}'), // L
    (0x4d, '\u{004d}'), // M
    (0x4e, '\u{004e}'), // N
    (0x4f, '\u{004f}'), // O
    (0x50, '\u{0050}'), // P
    (0x51, '\u{0051}'), // Q
    (0x52, '\u{0052}'), // R
    (0x53, '\u{0053}'), // S
    (0x54, '\u{0054}'), // T
    (0x55, '\u{0055}'), // U
    (0x56, '\u{0056}'), // V
    (0x57, '\u{0057}'), // W
    (0x58, '\u{0058}'), // X
    (0x59, '\u{0059}'), // Y
    (0x5a, '\u{005a}'), // Z
    (0x5b, '\u{005b}'), // bracketleft
    (0x5c, '\u{005c}'), // backslash
    (0x5d, '\u{005d}'), // bracketright
    (0x5e, '\u{005e}'), // asciicircum
    (0x5f, '\u{005f}'), // underscore
    (0x60, '\u{0060}'), // grave
    (0x61, '\u{0061}'), // a
    (0x62, '\u{0062}'), // b
    (0x63, '\u{0063}'), // c
    (0x64, '\u{0064}'), // d
    (0x65, '\u{0065}'), // e
    (0x66, '\u{0066}'), // f
    (0x67, '\u{0067}'), // g
    (0x68, '\u{0068}'), // h
    (0x69, '\u{0069}'), // i
    (0x6a, '\u{006a}'), // j
    (0x6b, '\u{006b}'), // k
    (0x6c, '\u{006c}'), // l
    (0x6d, '\u{006d}'), // m
    (0x6e, '\u{006e}'), // n
    (0x6f, '\u{006f}'), // o
    (0x70, '\u{0070}'), // p
    (0x71, '\u{0071}'), // q
    (0x72, '\u{0072}'), // r
    (0x73, '\u{0073}'), // s
    (0x74, '\u{0074}'), // t
    (0x75, '\u{0075}'), // u
    (0x76, '\u{0076}'), // v
    (0x77, '\u{0077}'), // w
    (0x78, '\u{0078}'), // x
    (0x79, '\u{0079}'), // y
    (0x7a, '\u{007a}'), // z
    (0x7b, '\u{007b}'), // braceleft
    (0x7c, '\u{007c}'), // bar
    (0x7d, '\u{007d}'), // braceright
    (0x7e, '\u{007e}'), // asciitilde
    (0x80, '\u{2022}'), // bullet
    (0x81, '\u{2020}'), // dagger
    (0x82, '\u{2021}'), // daggerdbl
    (0x83, '\u{2026}'), // ellipsis
    (0x84, '\u{2014}'), // emdash
    (0x85, '\u{2013}'), // endash
    (0x86, '\u{0192}'), // florin
    (0x87, '\u{2044}'), // fraction
    (0x88, '\u{2039}'), // guilsinglleft
    (0x89, '\u{203a}'), // guilsinglright
    (0x8a, '\u{2212}'), // minus
    (0x8b, '\u{2030}'), // perthousand
    (0x8c, '\u{201e}'), // quotedblbase
    (0x8d, '\u{201c}'), // quotedblleft
    (0x8e, '\u{201d}'), // quotedblright
    (0x8f, '\u{2018}'), // quoteleft
    (0x90, '\u{2019}'), // quoteright
    (0x91, '\u{201a}'), // quotesinglbase
    (0x92, '\u{2122}'), // trademark
    (0x93, '\u{fb01}'), // fi
    (0x94, '\u{fb02}'), // fl
    (0x95, '\u{0141}'), // Lslash
    (0x96, '\u{0152}'), // OE
    (0x97, '\u{0160}'), // Scaron
    (0x98, '\u{0178}'), // Ydieresis
    (0x99, '\u{017d}'), // Zcaron
    (0x9a, '\u{0131}'), // dotlessi
    (0x9b, '\u{0142}'), // lslash
    (0x9c, '\u{0153}'), // oe
    (0x9d, '\u{0161}'), // scaron
    (0x9e, '\u{017e}'), // zcaron
    (0xa0, '\u{20ac}'), // Euro
    (0xa1, '\u{00a1}'), // exclamdown
    (0xa2, '\u{00a2}'), // cent
    (0xa3, '\u{00a3}'), // sterling
    (0xa4, '\u{00a4}'), // currency
    (0xa5, '\u{00a5}'), // yen
    (0xa6, '\u{00a6}'), // brokenbar
    (0xa7, '\u{00a7}'), // section
    (0xa8, '\u{00a8}'), // dieresis
    (0xa9, '\u{00a9}'), // copyright
    (0xaa, '\u{00aa}'), // ordfeminine
    (0xab, '\u{00ab}'), // guillemotleft
    (0xac, '\u{00ac}'), // logicalnot
    (0xae, '\u{00ae}'), // registered
    (0xaf, '\u{00af}'), // macron
    (0xb0, '\u{00b0}'), // degree
    (0xb1, '\u{00b1}'), // plusminus
    (0xb2, '\u{00b2}'), // twosuperior
    (0xb3, '\u{00b3}'), // threesuperior
    (0xb4, '\u{00b4}'), // acute
    (0xb5, '\u{00b5}'), // mu
    (0xb6, '\u{00b6}'), // paragraph
    (0xb7, '\u{00b7}'), // middot
    (0xb8, '\u{00b8}'), // cedilla
    (0xb9, '\u{00b9}'), // onesuperior
    (0xba, '\u{00ba}'), // ordmasculine
    (0xbb, '\u{00bb}'), // guillemotright
    (0xbc, '\u{00bc}'), // onequarter
    (0xbd, '\u{00bd}'), // onehalf
    (0xbe, '\u{00be}'), // threequarters
    (0xbf, '\u{00bf}'), // questiondown
    (0xc0, '\u{00c0}'), // Agrave
    (0xc1, '\u{00c1}'), // Aacute
    (0xc2, '\u{00c2}'), // Acircumflex
    (0xc3, '\u{00c3}'), // Atilde
    (0xc4, '\u{00c4}'), // Adieresis
    (0xc5, '\u{00c5}'), // Aring
    (0xc6, '\u{00c6}'), // AE
    (0xc7, '\u{00c7}'), // Ccedilla
    (0xc8, '\u{00c8}'), // Egrave
    (0xc9, '\u{00c9}'), // Eacute
    (0xca, '\u{00ca}'), // Ecircumflex
    (0xcb, '\u{00cb}'), // Edieresis
    (0xcc, '\u{00cc}'), // Igrave
    (0xcd, '\u{00cd}'), // Iacute
    (0xce, '\u{00ce}'), // Icircumflex
    (0xcf, '\u{00cf}'), // Idieresis
    (0xd0, '\u{00d0}'), // Eth
    (0xd1, '\u{00d1}'), // Ntilde
    (0xd2, '\u{00d2}'), // Ograve
    (0xd3, '\u{00d3}'), // Oacute
    (0xd4, '\u{00d4}'), // Ocircumflex
    (0xd5, '\u{00d5}'), // Otilde
    (0xd6, '\u{00d6}'), // Odieresis
    (0xd7, '\u{00d7}'), // multiply
    (0xd8, '\u{00d8}'), // Oslash
    (0xd9, '\u{00d9}'), // Ugrave
    (0xda, '\u{00da}'), // Uacute
    (0xdb, '\u{00db}'), // Ucircumflex
    (0xdc, '\u{00dc}'), // Udieresis
    (0xdd, '\u{00dd}'), // Yacute
    (0xde, '\u{00de}'), // Thorn
    (0xdf, '\u{00df}'), // germandbls
    (0xe0, '\u{00e0}'), // agrave
    (0xe1, '\u{00e1}'), // aacute
    (0xe2, '\u{00e2}'), // acircumflex
    (0xe3, '\u{00e3}'), // atilde
    (0xe4, '\u{00e4}'), // adieresis
    (0xe5, '\u{00e5}'), // aring
    (0xe6, '\u{00e6}'), // ae
    (0xe7, '\u{00e7}'), // ccedilla
    (0xe8, '\u{00e8}'), // egrave
    (0xe9, '\u{00e9}'), // eacute
    (0xea, '\u{00ea}'), // ecircumflex
    (0xeb, '\u{00eb}'), // edieresis
    (0xec, '\u{00ec}'), // igrave
    (0xed, '\u{00ed}'), // iacute
    (0xee, '\u{00ee}'), // icircumflex
    (0xef, '\u{00ef}'), // idieresis
    (0xf0, '\u{00f0}'), // eth
    (0xf1, '\u{00f1}'), // ntilde
    (0xf2, '\u{00f2}'), // ograve
    (0xf3, '\u{00f3}'), // oacute
    (0xf4, '\u{00f4}'), // ocircumflex
    (0xf5, '\u{00f5}'), // otilde
    (0xf6, '\u{00f6}'), // odieresis
    (0xf7, '\u{00f7}'), // divide
    (0xf8, '\u{00f8}'), // oslash
    (0xf9, '\u{00f9}'), // ugrave
    (0xfa, '\u{00fa}'), // uacute
    (0xfb, '\u{00fb}'), // ucircumflex
    (0xfc, '\u{00fc}'), // udieresis
    (0xfd, '\u{00fd}'), // yacute
    (0xfe, '\u{00fe}'), // thorn
    (0xff, '\u{00ff}'), // ydieresis
];
