//! Glyph names from the Adobe Glyph List.

/// Sorted by glyph name.
pub(crate) const GLYPH_NAMES: &[(&str, char)] = &[
    (".notdef", '\u{fffd}'),
    ("A", '\u{0041}'),
    ("AE", '\u{00c6}'),
    ("AEacute", '\u{01fc}'),
    ("AEmacron", '\u{01e2}'),
    ("AEsmall", '\u{f7e6}'),
    ("Aacute", '\u{00c1}'),
    ("Aacutesmall", '\u{f7e1}'),
    ("Abreve", '\u{0102}'),
    ("Abreveacute", '\u{1eae}'),
    ("Abrevecyrillic", '\u{04d0}'),
    ("Abrevedotbelow", '\u{1eb6}'),
    ("Abrevegrave", '\u{1eb0}'),
    ("Abrevehookabove", '\u{1eb2}'),
    ("Abrevetilde", '\u{1eb4}'),
    ("Acaron", '\u{01cd}'),
    ("Acircle", '\u{24b6}'),
    ("Acircumflex", '\u{00c2}'),
    ("Acircumflexacute", '\u{1ea4}'),
    ("Acircumflexdotbelow", '\u{1eac}'),
    ("Acircumflexgrave", '\u{1ea6}'),
    ("Acircumflexhookabove", '\u{1ea8}'),
    ("Acircumflexsmall", '\u{f7e2}'),
    ("Acircumflextilde", '\u{1eaa}'),
    ("Acute", '\u{f6c9}'),
    ("Acutesmall", '\u{f7b4}'),
    ("Acyrillic", '\u{0410}'),
    ("Adblgrave", '\u{0200}'),
    ("Adieresis", '\u{00c4}'),
    ("Adieresiscyrillic", '\u{04d2}'),
    ("Adieresismacron", '\u{01de}'),
    ("Adieresissmall", '\u{f7e4}'),
    ("Adotbelow", '\u{1ea0}'),
    ("Adotmacron", '\u{01e0}'),
    ("Agrave", '\u{00c0}'),
    ("Agravesmall", '\u{f7e0}'),
    ("Ahookabove", '\u{1ea2}'),
    ("Aiecyrillic", '\u{04d4}'),
    ("Ainvertedbreve", '\u{0202}'),
    ("Alpha", '\u{0391}'),
    ("Alphatonos", '\u{0386}'),
    ("Amacron", '\u{0100}'),
    ("Amonospace", '\u{ff21}'),
    ("Aogonek", '\u{0104}'),
    ("Aring", '\u{00c5}'),
    ("Aringacute", '\u{01fa}'),
    ("Aringbelow", '\u{1e00}'),
    ("Aringsmall", '\u{f7e5}'),
    ("Asmall", '\u{f761}'),
    ("Atilde", '\u{00c3}'),
    ("Atildesmall", '\u{f7e3}'),
    ("Aybarmenian", '\u{0531}'),
    ("B", '\u{0042}'),
    ("Bcircle", '\u{24b7}'),
    ("Bdotaccent", '\u{1e02}'),
    ("Bdotbelow", '\u{1e04}'),
    ("Becyrillic", '\u{0411}'),
    ("Benarmenian", '\u{0532}'),
    ("Beta", '\u{0392}'),
    ("Bhook", '\u{0181}'),
    ("Blinebelow", '\u{1e06}'),
    ("Bmonospace", '\u{ff22}'),
    ("Brevesmall", '\u{f6f4}'),
    ("Bsmall", '\u{f762}'),
    ("Btopbar", '\u{0182}'),
    ("C", '\u{0043}'),
    ("Caarmenian", '\u{053e}'),
    ("Cacute", '\u{0106}'),
    ("Caron", '\u{f6ca}'),
    ("Caronsmall", '\u{f6f5}'),
    ("Ccaron", '\u{010c}'),
    ("Ccedilla", '\u{00c7}'),
    ("Ccedillaacute", '\u{1e08}'),
    ("Ccedillasmall", '\u{f7e7}'),
    ("Ccircle", '\u{24b8}'),
    ("Ccircumflex", '\u{0108}'),
    ("Cdot", '\u{010a}'),
    ("Cdotaccent", '\u{010a}'),
    ("Cedillasmall", '\u{f7b8}'),
    ("Chaarmenian", '\u{0549}'),
    ("Cheabkhasiancyrillic", '\u{04bc}'),
    ("Checyrillic", '\u{0427}'),
    ("Chedescenderabkhasiancyrillic", '\u{04be}'),
    ("Chedescendercyrillic", '\u{04b6}'),
    ("Chedieresiscyrillic", '\u{04f4}'),
    ("Cheharmenian", '\u{0543}'),
    ("Chekhakassiancyrillic", '\u{04cb}'),
    ("Cheverticalstrokecyrillic", '\u{04b8}'),
    ("Chi", '\u{03a7}'),
    ("Chook", '\u{0187}'),
    ("Circumflexsmall", '\u{f6f6}'),
    ("Cmonospace", '\u{ff23}'),
    ("Coarmenian", '\u{0551}'),
    ("Csmall", '\u{f763}'),
    ("D", '\u{0044}'),
    ("DZ", '\u{01f1}'),
    ("DZcaron", '\u{01c4}'),
    ("Daarmenian", '\u{0534}'),
    ("Dafrican", '\u{0189}'),
    ("Dbar", '\u{0110}'),
    ("Dcaron", '\u{010e}'),
    ("Dcedilla", '\u{1e10}'),
    ("Dcircle", '\u{24b9}'),
    ("Dcircumflexbelow", '\u{1e12}'),
    ("Dcroat", '\u{0110}'),
    ("Ddotaccent", '\u{1e0a}'),
    ("Ddotbelow", '\u{1e0c}'),
    ("Decyrillic", '\u{0414}'),
    ("Deicoptic", '\u{03ee}'),
    ("Delta", '\u{2206}'),
    ("Deltagreek", '\u{0394}'),
    ("Dhook", '\u{018a}'),
    ("Dieresis", '\u{f6cb}'),
    ("DieresisAcute", '\u{f6cc}'),
    ("DieresisGrave", '\u{f6cd}'),
    ("Dieresissmall", '\u{f7a8}'),
    ("Digammagreek", '\u{03dc}'),
    ("Djecyrillic", '\u{0402}'),
    ("Dlinebelow", '\u{1e0e}'),
    ("Dmonospace", '\u{ff24}'),
    ("Dotaccentsmall", '\u{f6f7}'),
    ("Dslash", '\u{0110}'),
    ("Dsmall", '\u{f764}'),
    ("Dtopbar", '\u{018b}'),
    ("Dz", '\u{01f2}'),
    ("Dzcaron", '\u{01c5}'),
    ("Dzeabkhasiancyrillic", '\u{04e0}'),
    ("Dzecyrillic", '\u{0405}'),
    ("Dzhecyrillic", '\u{040f}'),
    ("E", '\u{0045}'),
    ("Eacute", '\u{00c9}'),
    ("Eacutesmall", '\u{f7e9}'),
    ("Ebreve", '\u{0114}'),
    ("Ecaron", '\u{011a}'),
    ("Ecedillabreve", '\u{1e1c}'),
    ("Echarmenian", '\u{0535}'),
    ("Ecircle", '\u{24ba}'),
    ("Ecircumflex", '\u{00ca}'),
    ("Ecircumflexacute", '\u{1ebe}'),
    ("Ecircumflexbelow", '\u{1e18}'),
    ("Ecircumflexdotbelow", '\u{1ec6}'),
    ("Ecircumflexgrave", '\u{1ec0}'),
    ("Ecircumflexhookabove", '\u{1ec2}'),
    ("Ecircumflexsmall", '\u{f7ea}'),
    ("Ecircumflextilde", '\u{1ec4}'),
    ("Ecyrillic", '\u{0404}'),
    ("Edblgrave", '\u{0204}'),
    ("Edieresis", '\u{00cb}'),
    ("Edieresissmall", '\u{f7eb}'),
    ("Edot", '\u{0116}'),
    ("Edotaccent", '\u{0116}'),
    ("Edotbelow", '\u{1eb8}'),
    ("Efcyrillic", '\u{0424}'),
    ("Egrave", '\u{00c8}'),
    ("Egravesmall", '\u{f7e8}'),
    ("Eharmenian", '\u{0537}'),
    ("Ehookabove", '\u{1eba}'),
    ("Eightroman", '\u{2167}'),
    ("Einvertedbreve", '\u{0206}'),
    ("Eiotifiedcyrillic", '\u{0464}'),
    ("Elcyrillic", '\u{041b}'),
    ("Elevenroman", '\u{216a}'),
    ("Emacron", '\u{0112}'),
    ("Emacronacute", '\u{1e16}'),
    ("Emacrongrave", '\u{1e14}'),
    ("Emcyrillic", '\u{041c}'),
    ("Emonospace", '\u{ff25}'),
    ("Encyrillic", '\u{041d}'),
    ("Endescendercyrillic", '\u{04a2}'),
    ("Eng", '\u{014a}'),
    ("Enghecyrillic", '\u{04a4}'),
    ("Enhookcyrillic", '\u{04c7}'),
    ("Eogonek", '\u{0118}'),
    ("Eopen", '\u{0190}'),
    ("Epsilon", '\u{0395}'),
    ("Epsilontonos", '\u{0388}'),
    ("Ercyrillic", '\u{0420}'),
    ("Ereversed", '\u{018e}'),
    ("Ereversedcyrillic", '\u{042d}'),
    ("Escyrillic", '\u{0421}'),
    ("Esdescendercyrillic", '\u{04aa}'),
    ("Esh", '\u{01a9}'),
    ("Esmall", '\u{f765}'),
    ("Eta", '\u{0397}'),
    ("Etarmenian", '\u{0538}'),
    ("Etatonos", '\u{0389}'),
    ("Eth", '\u{00d0}'),
    ("Ethsmall", '\u{f7f0}'),
    ("Etilde", '\u{1ebc}'),
    ("Etildebelow", '\u{1e1a}'),
    ("Euro", '\u{20ac}'),
    ("Ezh", '\u{01b7}'),
    ("Ezhcaron", '\u{01ee}'),
    ("Ezhreversed", '\u{01b8}'),
    ("F", '\u{0046}'),
    ("Fcircle", '\u{24bb}'),
    ("Fdotaccent", '\u{1e1e}'),
    ("Feharmenian", '\u{0556}'),
    ("Feicoptic", '\u{03e4}'),
    ("Fhook", '\u{0191}'),
    ("Fitacyrillic", '\u{0472}'),
    ("Fiveroman", '\u{2164}'),
    ("Fmonospace", '\u{ff26}'),
    ("Fourroman", '\u{2163}'),
    ("Fsmall", '\u{f766}'),
    ("G", '\u{0047}'),
    ("GBsquare", '\u{3387}'),
    ("Gacute", '\u{01f4}'),
    ("Gamma", '\u{0393}'),
    ("Gammaafrican", '\u{0194}'),
    ("Gangiacoptic", '\u{03ea}'),
    ("Gbreve", '\u{011e}'),
    ("Gcaron", '\u{01e6}'),
    ("Gcedilla", '\u{0122}'),
    ("Gcircle", '\u{24bc}'),
    ("Gcircumflex", '\u{011c}'),
    ("Gcommaaccent", '\u{0122}'),
    ("Gdot", '\u{0120}'),
    ("Gdotaccent", '\u{0120}'),
    ("Gecyrillic", '\u{0413}'),
    ("Germandbls", '\u{0053}'),
    ("Germandbls2", '\u{1e9e}'),
    ("Ghadarmenian", '\u{0542}'),
    ("Ghemiddlehookcyrillic", '\u{0494}'),
    ("Ghestrokecyrillic", '\u{0492}'),
    ("Gheupturncyrillic", '\u{0490}'),
    ("Ghook", '\u{0193}'),
    ("Gimarmenian", '\u{0533}'),
    ("Gjecyrillic", '\u{0403}'),
    ("Gmacron", '\u{1e20}'),
    ("Gmonospace", '\u{ff27}'),
    ("Grave", '\u{f6ce}'),
    ("Gravesmall", '\u{f760}'),
    ("Gsmall", '\u{f767}'),
    ("Gsmallhook", '\u{029b}'),
    ("Gstroke", '\u{01e4}'),
    ("H", '\u{0048}'),
    ("H18533", '\u{25cf}'),
    ("H18543", '\u{25aa}'),
    ("H18551", '\u{25ab}'),
    ("H22073", '\u{25a1}'),
    ("HPsquare", '\u{33cb}'),
    ("Haabkhasiancyrillic", '\u{04a8}'),
    ("Hadescendercyrillic", '\u{04b2}'),
    ("Hardsigncyrillic", '\u{042a}'),
    ("Hbar", '\u{0126}'),
    ("Hbrevebelow", '\u{1e2a}'),
    ("Hcedilla", '\u{1e28}'),
    ("Hcircle", '\u{24bd}'),
    ("Hcircumflex", '\u{0124}'),
    ("Hdieresis", '\u{1e26}'),
    ("Hdotaccent", '\u{1e22}'),
    ("Hdotbelow", '\u{1e24}'),
    ("Hmonospace", '\u{ff28}'),
    ("Hoarmenian", '\u{0540}'),
    ("Horicoptic", '\u{03e8}'),
    ("Hsmall", '\u{f768}'),
    ("Hungarumlaut", '\u{f6cf}'),
    ("Hungarumlautsmall", '\u{f6f8}'),
    ("Hzsquare", '\u{3390}'),
    ("I", '\u{0049}'),
    ("IAcyrillic", '\u{042f}'),
    ("IJ", '\u{0132}'),
    ("IUcyrillic", '\u{042e}'),
    ("Iacute", '\u{00cd}'),
    ("Iacutesmall", '\u{f7ed}'),
    ("Ibreve", '\u{012c}'),
    ("Icaron", '\u{01cf}'),
    ("Icircle", '\u{24be}'),
    ("Icircumflex", '\u{00ce}'),
    ("Icircumflexsmall", '\u{f7ee}'),
    ("Icyrillic", '\u{0406}'),
    ("Idblgrave", '\u{0208}'),
    ("Idieresis", '\u{00cf}'),
    ("Idieresisacute", '\u{1e2e}'),
    ("Idieresiscyrillic", '\u{04e4}'),
    ("Idieresissmall", '\u{f7ef}'),
    ("Idot", '\u{0130}'),
    ("Idotaccent", '\u{0130}'),
    ("Idotbelow", '\u{1eca}'),
    ("Iebrevecyrillic", '\u{04d6}'),
    ("Iecyrillic", '\u{0415}'),
    ("Ifractur", '\u{2111}'),
    ("Ifraktur", '\u{2111}'),
    ("Igrave", '\u{00cc}'),
    ("Igravesmall", '\u{f7ec}'),
    ("Ihookabove", '\u{1ec8}'),
    ("Iicyrillic", '\u{0418}'),
    ("Iinvertedbreve", '\u{020a}'),
    ("Iishortcyrillic", '\u{0419}'),
    ("Imacron", '\u{012a}'),
    ("Imacroncyrillic", '\u{04e2}'),
    ("Imonospace", '\u{ff29}'),
    ("Iniarmenian", '\u{053b}'),
    ("Iocyrillic", '\u{0401}'),
    ("Iogonek", '\u{012e}'),
    ("Iota", '\u{0399}'),
    ("Iotaafrican", '\u{0196}'),
    ("Iotadieresis", '\u{03aa}'),
    ("Iotatonos", '\u{038a}'),
    ("Ismall", '\u{f769}'),
    ("Istroke", '\u{0197}'),
    ("Itilde", '\u{0128}'),
    ("Itildebelow", '\u{1e2c}'),
    ("Izhitsacyrillic", '\u{0474}'),
    ("Izhitsadblgravecyrillic", '\u{0476}'),
    ("J", '\u{004a}'),
    ("Jaarmenian", '\u{0541}'),
    ("Jcircle", '\u{24bf}'),
    ("Jcircumflex", '\u{0134}'),
    ("Jecyrillic", '\u{0408}'),
    ("Jheharmenian", '\u{054b}'),
    ("Jmonospace", '\u{ff2a}'),
    ("Jsmall", '\u{f76a}'),
    ("K", '\u{004b}'),
    ("KBsquare", '\u{3385}'),
    ("KKsquare", '\u{33cd}'),
    ("Kabashkircyrillic", '\u{04a0}'),
    ("Kacute", '\u{1e30}'),
    ("Kacyrillic", '\u{041a}'),
    ("Kadescendercyrillic", '\u{049a}'),
    ("Kahookcyrillic", '\u{04c3}'),
    ("Kappa", '\u{039a}'),
    ("Kastrokecyrillic", '\u{049e}'),
    ("Kaverticalstrokecyrillic", '\u{049c}'),
    ("Kcaron", '\u{01e8}'),
    ("Kcedilla", '\u{0136}'),
    ("Kcircle", '\u{24c0}'),
    ("Kcommaaccent", '\u{0136}'),
    ("Kdotbelow", '\u{1e32}'),
    ("Keharmenian", '\u{0554}'),
    ("Kenarmenian", '\u{053f}'),
    ("Khacyrillic", '\u{0425}'),
    ("Kheicoptic", '\u{03e6}'),
    ("Khook", '\u{0198}'),
    ("Kjecyrillic", '\u{040c}'),
    ("Klinebelow", '\u{1e34}'),
    ("Kmonospace", '\u{ff2b}'),
    ("Koppacyrillic", '\u{0480}'),
    ("Koppagreek", '\u{03de}'),
    ("Ksicyrillic", '\u{046e}'),
    ("Ksmall", '\u{f76b}'),
    ("L", '\u{004c}'),
    ("LJ", '\u{01c7}'),
    ("LL", '\u{f6bf}'),
    ("Lacute", '\u{0139}'),
    ("Lambda", '\u{039b}'),
    ("Lcaron", '\u{013d}'),
    ("Lcedilla", '\u{013b}'),
    ("Lcircle", '\u{24c1}'),
    ("Lcircumflexbelow", '\u{1e3c}'),
    ("Lcommaaccent", '\u{013b}'),
    ("Ldot", '\u{013f}'),
    ("Ldotaccent", '\u{013f}'),
    ("Ldotbelow", '\u{1e36}'),
    ("Ldotbelowmacron", '\u{1e38}'),
    ("Liwnarmenian", '\u{053c}'),
    ("Lj", '\u{01c8}'),
    ("Ljecyrillic", '\u{0409}'),
    ("Llinebelow", '\u{1e3a}'),
    ("Lmonospace", '\u{ff2c}'),
    ("Lslash", '\u{0141}'),
    ("Lslashsmall", '\u{f6f9}'),
    ("Lsmall", '\u{f76c}'),
    ("M", '\u{004d}'),
    ("MBsquare", '\u{3386}'),
    ("Macron", '\u{f6d0}'),
    ("Macronsmall", '\u{f7af}'),
    ("Macute", '\u{1e3e}'),
    ("Mcircle", '\u{24c2}'),
    ("Mdotaccent", '\u{1e40}'),
    ("Mdotbelow", '\u{1e42}'),
    ("Menarmenian", '\u{0544}'),
    ("Mmonospace", '\u{ff2d}'),
    ("Msmall", '\u{f76d}'),
    ("Mturned", '\u{019c}'),
    ("Mu", '\u{039c}'),
    ("N", '\u{004e}'),
    ("NJ", '\u{01ca}'),
    ("Nacute", '\u{0143}'),
    ("Ncaron", '\u{0147}'),
    ("Ncedilla", '\u{0145}'),
    ("Ncircle", '\u{24c3}'),
    ("Ncircumflexbelow", '\u{1e4a}'),
    ("Ncommaaccent", '\u{0145}'),
    ("Ndotaccent", '\u{1e44}'),
    ("Ndotbelow", '\u{1e46}'),
    ("Ng", '\u{014a}'),
    ("Nhookleft", '\u{019d}'),
    ("Nineroman", '\u{2168}'),
    ("Nj", '\u{01cb}'),
    ("Njecyrillic", '\u{040a}'),
    ("Nlinebelow", '\u{1e48}'),
    ("Nmonospace", '\u{ff2e}'),
    ("Nowarmenian", '\u{0546}'),
    ("Nsmall", '\u{f76e}'),
    ("Ntilde", '\u{00d1}'),
    ("Ntildesmall", '\u{f7f1}'),
    ("Nu", '\u{039d}'),
    ("O", '\u{004f}'),
    ("OE", '\u{0152}'),
    ("OEsmall", '\u{f6fa}'),
    ("Oacute", '\u{00d3}'),
    ("Oacutesmall", '\u{f7f3}'),
    ("Obarredcyrillic", '\u{04e8}'),
    ("Obarreddieresiscyrillic", '\u{04ea}'),
    ("Obreve", '\u{014e}'),
    ("Ocaron", '\u{01d1}'),
    ("Ocenteredtilde", '\u{019f}'),
    ("Ocircle", '\u{24c4}'),
    ("Ocircumflex", '\u{00d4}'),
    ("Ocircumflexacute", '\u{1ed0}'),
    ("Ocircumflexdotbelow", '\u{1ed8}'),
    ("Ocircumflexgrave", '\u{1ed2}'),
    ("Ocircumflexhookabove", '\u{1ed4}'),
    ("Ocircumflexsmall", '\u{f7f4}'),
    ("Ocircumflextilde", '\u{1ed6}'),
    ("Ocyrillic", '\u{041e}'),
    ("Odblacute", '\u{0150}'),
    ("Odblgrave", '\u{020c}'),
    ("Odieresis", '\u{00d6}'),
    ("Odieresiscyrillic", '\u{04e6}'),
    ("Odieresissmall", '\u{f7f6}'),
    ("Odotbelow", '\u{1ecc}'),
    ("Ogoneksmall", '\u{f6fb}'),
    ("Ograve", '\u{00d2}'),
    ("Ogravesmall", '\u{f7f2}'),
    ("Oharmenian", '\u{0555}'),
    ("Ohm", '\u{2126}'),
    ("Ohookabove", '\u{1ece}'),
    ("Ohorn", '\u{01a0}'),
    ("Ohornacute", '\u{1eda}'),
    ("Ohorndotbelow", '\u{1ee2}'),
    ("Ohorngrave", '\u{1edc}'),
    ("Ohornhookabove", '\u{1ede}'),
    ("Ohorntilde", '\u{1ee0}'),
    ("Ohungarumlaut", '\u{0150}'),
    ("Oi", '\u{01a2}'),
    ("Oinvertedbreve", '\u{020e}'),
    ("Omacron", '\u{014c}'),
    ("Omacronacute", '\u{1e52}'),
    ("Omacrongrave", '\u{1e50}'),
    ("Omega", '\u{2126}'),
    ("Omegacyrillic", '\u{0460}'),
    ("Omegagreek", '\u{03a9}'),
    ("Omegaroundcyrillic", '\u{047a}'),
    ("Omegatitlocyrillic", '\u{047c}'),
    ("Omegatonos", '\u{038f}'),
    ("Omicron", '\u{039f}'),
    ("Omicrontonos", '\u{038c}'),
    ("Omonospace", '\u{ff2f}'),
    ("Oneroman", '\u{2160}'),
    ("Oogonek", '\u{01ea}'),
    ("Oogonekmacron", '\u{01ec}'),
    ("Oopen", '\u{0186}'),
    ("Oslash", '\u{00d8}'),
    ("Oslashacute", '\u{01fe}'),
    ("Oslashsmall", '\u{f7f8}'),
    ("Osmall", '\u{f76f}'),
    ("Ostrokeacute", '\u{01fe}'),
    ("Otcyrillic", '\u{047e}'),
    ("Otilde", '\u{00d5}'),
    ("Otildeacute", '\u{1e4c}'),
    ("Otildedieresis", '\u{1e4e}'),
    ("Otildesmall", '\u{f7f5}'),
    ("P", '\u{0050}'),
    ("Pacute", '\u{1e54}'),
    ("Pcircle", '\u{24c5}'),
    ("Pdotaccent", '\u{1e56}'),
    ("Pecyrillic", '\u{041f}'),
    ("Peharmenian", '\u{054a}'),
    ("Pemiddlehookcyrillic", '\u{04a6}'),
    ("Phi", '\u{03a6}'),
    ("Phook", '\u{01a4}'),
    ("Pi", '\u{03a0}'),
    ("Piwrarmenian", '\u{0553}'),
    ("Pmonospace", '\u{ff30}'),
    ("Psi", '\u{03a8}'),
    ("Psicyrillic", '\u{0470}'),
    ("Psmall", '\u{f770}'),
    ("Q", '\u{0051}'),
    ("Qcircle", '\u{24c6}'),
    ("Qmonospace", '\u{ff31}'),
    ("Qsmall", '\u{f771}'),
    ("R", '\u{0052}'),
    ("Raarmenian", '\u{054c}'),
    ("Racute", '\u{0154}'),
    ("Rcaron", '\u{0158}'),
    ("Rcedilla", '\u{0156}'),
    ("Rcircle", '\u{24c7}'),
    ("Rcommaaccent", '\u{0156}'),
    ("Rdblgrave", '\u{0210}'),
    ("Rdotaccent", '\u{1e58}'),
    ("Rdotbelow", '\u{1e5a}'),
    ("Rdotbelowmacron", '\u{1e5c}'),
    ("Reharmenian", '\u{0550}'),
    ("Rfractur", '\u{211c}'),
    ("Rfraktur", '\u{211c}'),
    ("Rho", '\u{03a1}'),
    ("Ringsmall", '\u{f6fc}'),
    ("Rinvertedbreve", '\u{0212}'),
    ("Rlinebelow", '\u{1e5e}'),
    ("Rmonospace", '\u{ff32}'),
    ("Rsmall", '\u{f772}'),
    ("Rsmallinverted", '\u{0281}'),
    ("Rsmallinvertedsuperior", '\u{02b6}'),
    ("S", '\u{0053}'),
    ("SF010000", '\u{250c}'),
    ("SF020000", '\u{2514}'),
    ("SF030000", '\u{2510}'),
    ("SF040000", '\u{2518}'),
    ("SF050000", '\u{253c}'),
    ("SF060000", '\u{252c}'),
    ("SF070000", '\u{2534}'),
    ("SF080000", '\u{251c}'),
    ("SF090000", '\u{2524}'),
    ("SF100000", '\u{2500}'),
    ("SF110000", '\u{2502}'),
    ("SF190000", '\u{2561}'),
    ("SF200000", '\u{2562}'),
    ("SF210000", '\u{2556}'),
    ("SF220000", '\u{2555}'),
    ("SF230000", '\u{2563}'),
    ("SF240000", '\u{2551}'),
    ("SF250000", '\u{2557}'),
    ("SF260000", '\u{255d}'),
    ("SF270000", '\u{255c}'),
    ("SF280000", '\u{255b}'),
    ("SF360000", '\u{255e}'),
    ("SF370000", '\u{255f}'),
    ("SF380000", '\u{255a}'),
    ("SF390000", '\u{2554}'),
    ("SF400000", '\u{2569}'),
    ("SF410000", '\u{2566}'),
    ("SF420000", '\u{2560}'),
    ("SF430000", '\u{2550}'),
    ("SF440000", '\u{256c}'),
    ("SF450000", '\u{2567}'),
    ("SF460000", '\u{2568}'),
    ("SF470000", '\u{2564}'),
    ("SF480000", '\u{2565}'),
    ("SF490000", '\u{2559}'),
    ("SF500000", '\u{2558}'),
    ("SF510000", '\u{2552}'),
    ("SF520000", '\u{2553}'),
    ("SF530000", '\u{256b}'),
    ("SF540000", '\u{256a}'),
    ("SS", '\u{0053}'),
    ("Sacute", '\u{015a}'),
    ("Sacutedotaccent", '\u{1e64}'),
    ("Sampigreek", '\u{03e0}'),
    ("Scaron", '\u{0160}'),
    ("Scarondotaccent", '\u{1e66}'),
    ("Scaronsmall", '\u{f6fd}'),
    ("Scedilla", '\u{015e}'),
    ("Schwa", '\u{018f}'),
    ("Schwacyrillic", '\u{04d8}'),
    ("Schwadieresiscyrillic", '\u{04da}'),
    ("Scircle", '\u{24c8}'),
    ("Scircumflex", '\u{015c}'),
    ("Scommaaccent", '\u{0218}'),
    ("Sdotaccent", '\u{1e60}'),
    ("Sdotbelow", '\u{1e62}'),
    ("Sdotbelowdotaccent", '\u{1e68}'),
    ("Seharmenian", '\u{054d}'),
    ("Sevenroman", '\u{2166}'),
    ("Shaarmenian", '\u{0547}'),
    ("Shacyrillic", '\u{0428}'),
    ("Shchacyrillic", '\u{0429}'),
    ("Sheicoptic", '\u{03e2}'),
    ("Shhacyrillic", '\u{04ba}'),
    ("Shimacoptic", '\u{03ec}'),
    ("Sigma", '\u{03a3}'),
    ("Sixroman", '\u{2165}'),
    ("Smonospace", '\u{ff33}'),
    ("Softsigncyrillic", '\u{042c}'),
    ("Ssmall", '\u{f773}'),
    ("Stigmagreek", '\u{03da}'),
    ("T", '\u{0054}'),
    ("Tau", '\u{03a4}'),
    ("Tbar", '\u{0166}'),
    ("Tcaron", '\u{0164}'),
    ("Tcedilla", '\u{0162}'),
    ("Tcircle", '\u{24c9}'),
    ("Tcircumflexbelow", '\u{1e70}'),
    ("Tcommaaccent", '\u{0162}'),
    ("Tdotaccent", '\u{1e6a}'),
    ("Tdotbelow", '\u{1e6c}'),
    ("Tecyrillic", '\u{0422}'),
    ("Tedescendercyrillic", '\u{04ac}'),
    ("Tenroman", '\u{2169}'),
    ("Tetsecyrillic", '\u{04b4}'),
    ("Theta", '\u{0398}'),
    ("Thook", '\u{01ac}'),
    ("Thorn", '\u{00de}'),
    ("Thornsmall", '\u{f7fe}'),
    ("Threeroman", '\u{2162}'),
    ("Tildesmall", '\u{f6fe}'),
    ("Tiwnarmenian", '\u{054f}'),
    ("Tlinebelow", '\u{1e6e}'),
    ("Tmonospace", '\u{ff34}'),
    ("Toarmenian", '\u{0539}'),
    ("Tonefive", '\u{01bc}'),
    ("Tonesix", '\u{0184}'),
    ("Tonetwo", '\u{01a7}'),
    ("Tretroflexhook", '\u{01ae}'),
    ("Tsecyrillic", '\u{0426}'),
    ("Tshecyrillic", '\u{040b}'),
    ("Tsmall", '\u{f774}'),
    ("Twelveroman", '\u{216b}'),
    ("Tworoman", '\u{2161}'),
    ("U", '\u{0055}'),
    ("Uacute", '\u{00da}'),
    ("Uacutesmall", '\u{f7fa}'),
    ("Ubreve", '\u{016c}'),
    ("Ucaron", '\u{01d3}'),
    ("Ucircle", '\u{24ca}'),
    ("Ucircumflex", '\u{00db}'),
    ("Ucircumflexbelow", '\u{1e76}'),
    ("Ucircumflexsmall", '\u{f7fb}'),
    ("Ucyrillic", '\u{0423}'),
    ("Udblacute", '\u{0170}'),
    ("Udblgrave", '\u{0214}'),
    ("Udieresis", '\u{00dc}'),
    ("Udieresisacute", '\u{01d7}'),
    ("Udieresisbelow", '\u{1e72}'),
    ("Udieresiscaron", '\u{01d9}'),
    ("Udieresiscyrillic", '\u{04f0}'),
    ("Udieresisgrave", '\u{01db}'),
    ("Udieresismacron", '\u{01d5}'),
    ("Udieresissmall", '\u{f7fc}'),
    ("Udotbelow", '\u{1ee4}'),
    ("Ugrave", '\u{00d9}'),
    ("Ugravesmall", '\u{f7f9}'),
    ("Uhookabove", '\u{1ee6}'),
    ("Uhorn", '\u{01af}'),
    ("Uhornacute", '\u{1ee8}'),
    ("Uhorndotbelow", '\u{1ef0}'),
    ("Uhorngrave", '\u{1eea}'),
    ("Uhornhookabove", '\u{1eec}'),
    ("Uhorntilde", '\u{1eee}'),
    ("Uhungarumlaut", '\u{0170}'),
    ("Uhungarumlautcyrillic", '\u{04f2}'),
    ("Uinvertedbreve", '\u{0216}'),
    ("Ukcyrillic", '\u{0478}'),
    ("Umacron", '\u{016a}'),
    ("Umacroncyrillic", '\u{04ee}'),
    ("Umacrondieresis", '\u{1e7a}'),
    ("Umonospace", '\u{ff35}'),
    ("Uogonek", '\u{0172}'),
    ("Upsilon", '\u{03a5}'),
    ("Upsilon1", '\u{03d2}'),
    ("Upsilonacutehooksymbolgreek", '\u{03d3}'),
    ("Upsilonafrican", '\u{01b1}'),
    ("Upsilondieresis", '\u{03ab}'),
    ("Upsilondieresishooksymbolgreek", '\u{03d4}'),
    ("Upsilonhooksymbol", '\u{03d2}'),
    ("Upsilontonos", '\u{038e}'),
    ("Uring", '\u{016e}'),
    ("Ushortcyrillic", '\u{040e}'),
    ("Usmall", '\u{f775}'),
    ("Ustraightcyrillic", '\u{04ae}'),
    ("Ustraightstrokecyrillic", '\u{04b0}'),
    ("Utilde", '\u{0168}'),
    ("Utildeacute", '\u{1e78}'),
    ("Utildebelow", '\u{1e74}'),
    ("V", '\u{0056}'),
    ("Vcircle", '\u{24cb}'),
    ("Vdotbelow", '\u{1e7e}'),
    ("Vecyrillic", '\u{0412}'),
    ("Vewarmenian", '\u{054e}'),
    ("Vhook", '\u{01b2}'),
    ("Vmonospace", '\u{ff36}'),
    ("Voarmenian", '\u{0548}'),
    ("Vsmall", '\u{f776}'),
    ("Vtilde", '\u{1e7c}'),
    ("W", '\u{0057}'),
    ("Wacute", '\u{1e82}'),
    ("Wcircle", '\u{24cc}'),
    ("Wcircumflex", '\u{0174}'),
    ("Wdieresis", '\u{1e84}'),
    ("Wdotaccent", '\u{1e86}'),
    ("Wdotbelow", '\u{1e88}'),
    ("Wgrave", '\u{1e80}'),
    ("Wmonospace", '\u{ff37}'),
    ("Wsmall", '\u{f777}'),
    ("X", '\u{0058}'),
    ("Xcircle", '\u{24cd}'),
    ("Xdieresis", '\u{1e8c}'),
    ("Xdotaccent", '\u{1e8a}'),
    ("Xeharmenian", '\u{053d}'),
    ("Xi", '\u{039e}'),
    ("Xmonospace", '\u{ff38}'),
    ("Xsmall", '\u{f778}'),
    ("Y", '\u{0059}'),
    ("Yacute", '\u{00dd}'),
    ("Yacutesmall", '\u{f7fd}'),
    ("Yatcyrillic", '\u{0462}'),
    ("Ycircle", '\u{24ce}'),
    ("Ycircumflex", '\u{0176}'),
    ("Ydieresis", '\u{0178}'),
    ("Ydieresissmall", '\u{f7ff}'),
    ("Ydotaccent", '\u{1e8e}'),
    ("Ydotbelow", '\u{1ef4}'),
    ("Yericyrillic", '\u{042b}'),
    ("Yerudieresiscyrillic", '\u{04f8}'),
    ("Ygrave", '\u{1ef2}'),
    ("Yhook", '\u{01b3}'),
    ("Yhookabove", '\u{1ef6}'),
    ("Yiarmenian", '\u{0545}'),
    ("Yicyrillic", '\u{0407}'),
    ("Yiwnarmenian", '\u{0552}'),
    ("Ymonospace", '\u{ff39}'),
    ("Ysmall", '\u{f779}'),
    ("Ytilde", '\u{1ef8}'),
    ("Yusbigcyrillic", '\u{046a}'),
    ("Yusbigiotifiedcyrillic", '\u{046c}'),
    ("Yuslittlecyrillic", '\u{0466}'),
    ("Yuslittleiotifiedcyrillic", '\u{0468}'),
    ("Z", '\u{005a}'),
    ("Zaarmenian", '\u{0536}'),
    ("Zacute", '\u{0179}'),
    ("Zcaron", '\u{017d}'),
    ("Zcaronsmall", '\u{f6ff}'),
    ("Zcircle", '\u{24cf}'),
    ("Zcircumflex", '\u{1e90}'),
    ("Zdot", '\u{017b}'),
    ("Zdotaccent", '\u{017b}'),
    ("Zdotbelow", '\u{1e92}'),
    ("Zecyrillic", '\u{0417}'),
    ("Zedescendercyrillic", '\u{0498}'),
    ("Zedieresiscyrillic", '\u{04de}'),
    ("Zeta", '\u{0396}'),
    ("Zhearmenian", '\u{053a}'),
    ("Zhebrevecyrillic", '\u{04c1}'),
    ("Zhecyrillic", '\u{0416}'),
    ("Zhedescendercyrillic", '\u{0496}'),
    ("Zhedieresiscyrillic", '\u{04dc}'),
    ("Zlinebelow", '\u{1e94}'),
    ("Zmonospace", '\u{ff3a}'),
    ("Zsmall", '\u{f77a}'),
    ("Zstroke", '\u{01b5}'),
    ("a", '\u{0061}'),
    ("aabengali", '\u{0986}'),
    ("aacute", '\u{00e1}'),
    ("aadeva", '\u{0906}'),
    ("aagujarati", '\u{0a86}'),
    ("aagurmukhi", '\u{0a06}'),
    ("aamatragurmukhi", '\u{0a3e}'),
    ("aarusquare", '\u{3303}'),
    ("aavowelsignbengali", '\u{09be}'),
    ("aavowelsigndeva", '\u{093e}'),
    ("aavowelsigngujarati", '\u{0abe}'),
    ("abbreviationmarkarmenian", '\u{055f}'),
    ("abbreviationsigndeva", '\u{0970}'),
    ("abengali", '\u{0985}'),
    ("abopomofo", '\u{311a}'),
    ("abreve", '\u{0103}'),
    ("abreveacute", '\u{1eaf}'),
    ("abrevecyrillic", '\u{04d1}'),
    ("abrevedotbelow", '\u{1eb7}'),
    ("abrevegrave", '\u{1eb1}'),
    ("abrevehookabove", '\u{1eb3}'),
    ("abrevetilde", '\u{1eb5}'),
    ("acaron", '\u{01ce}'),
    ("acircle", '\u{24d0}'),
    ("acircumflex", '\u{00e2}'),
    ("acircumflexacute", '\u{1ea5}'),
    ("acircumflexdotbelow", '\u{1ead}'),
    ("acircumflexgrave", '\u{1ea7}'),
    ("acircumflexhookabove", '\u{1ea9}'),
    ("acircumflextilde", '\u{1eab}'),
    ("acute", '\u{00b4}'),
    ("acutebelowcmb", '\u{0317}'),
    ("acutecmb", '\u{0301}'),
    ("acutecomb", '\u{0301}'),
    ("acutedeva", '\u{0954}'),
    ("acutelowmod", '\u{02cf}'),
    ("acutetonecmb", '\u{0341}'),
    ("acyrillic", '\u{0430}'),
    ("adblgrave", '\u{0201}'),
    ("addakgurmukhi", '\u{0a71}'),
    ("adeva", '\u{0905}'),
    ("adieresis", '\u{00e4}'),
    ("adieresiscyrillic", '\u{04d3}'),
    ("adieresismacron", '\u{01df}'),
    ("adotbelow", '\u{1ea1}'),
    ("adotmacron", '\u{01e1}'),
    ("ae", '\u{00e6}'),
    ("aeacute", '\u{01fd}'),
    ("aekorean", '\u{3150}'),
    ("aemacron", '\u{01e3}'),
    ("afii00208", '\u{2015}'),
    ("afii08941", '\u{20a4}'),
    ("afii10017", '\u{0410}'),
    ("afii10018", '\u{0411}'),
    ("afii10019", '\u{0412}'),
    ("afii10020", '\u{0413}'),
    ("afii10021", '\u{0414}'),
    ("afii10022", '\u{0415}'),
    ("afii10023", '\u{0401}'),
    ("afii10024", '\u{0416}'),
    ("afii10025", '\u{0417}'),
    ("afii10026", '\u{0418}'),
    ("afii10027", '\u{0419}'),
    ("afii10028", '\u{041a}'),
    ("afii10029", '\u{041b}'),
    ("afii10030", '\u{041c}'),
    ("afii10031", '\u{041d}'),
    ("afii10032", '\u{041e}'),
    ("afii10033", '\u{041f}'),
    ("afii10034", '\u{0420}'),
    ("afii10035", '\u{0421}'),
    ("afii10036", '\u{0422}'),
    ("afii10037", '\u{0423}'),
    ("afii10038", '\u{0424}'),
    ("afii10039", '\u{0425}'),
    ("afii10040", '\u{0426}'),
    ("afii10041", '\u{0427}'),
    ("afii10042", '\u{0428}'),
    ("afii10043", '\u{0429}'),
    ("afii10044", '\u{042a}'),
    ("afii10045", '\u{042b}'),
    ("afii10046", '\u{042c}'),
    ("afii10047", '\u{042d}'),
    ("afii10048", '\u{042e}'),
    ("afii10049", '\u{042f}'),
    ("afii10050", '\u{0490}'),
    ("afii10051", '\u{0402}'),
    ("afii10052", '\u{0403}'),
    ("afii10053", '\u{0404}'),
    ("afii10054", '\u{0405}'),
    ("afii10055", '\u{0406}'),
    ("afii10056", '\u{0407}'),
    ("afii10057", '\u{0408}'),
    ("afii10058", '\u{0409}'),
    ("afii10059", '\u{040a}'),
    ("afii10060", '\u{040b}'),
    ("afii10061", '\u{040c}'),
    ("afii10062", '\u{040e}'),
    ("afii10063", '\u{f6c4}'),
    ("afii10064", '\u{f6c5}'),
    ("afii10065", '\u{0430}'),
    ("afii10066", '\u{0431}'),
    ("afii10067", '\u{0432}'),
    ("afii10068", '\u{0433}'),
    ("afii10069", '\u{0434}'),
    ("afii10070", '\u{0435}'),
    ("afii10071", '\u{0451}'),
    ("afii10072", '\u{0436}'),
    ("afii10073", '\u{0437}'),
    ("afii10074", '\u{0438}'),
    ("afii10075", '\u{0439}'),
    ("afii10076", '\u{043a}'),
    ("afii10077", '\u{043b}'),
    ("afii10078", '\u{043c}'),
    ("afii10079", '\u{043d}'),
    ("afii10080", '\u{043e}'),
    ("afii10081", '\u{043f}'),
    ("afii10082", '\u{0440}'),
    ("afii10083", '\u{0441}'),
    ("afii10084", '\u{0442}'),
    ("afii10085", '\u{0443}'),
    ("afii10086", '\u{0444}'),
    ("afii10087", '\u{0445}'),
    ("afii10088", '\u{0446}'),
    ("afii10089", '\u{0447}'),
    ("afii10090", '\u{0448}'),
    ("afii10091", '\u{0449}'),
    ("afii10092", '\u{044a}'),
    ("afii10093", '\u{044b}'),
    ("afii10094", '\u{044c}'),
    ("afii10095", '\u{044d}'),
    ("afii10096", '\u{044e}'),
    ("afii10097", '\u{044f}'),
    ("afii10098", '\u{0491}'),
    ("afii10099", '\u{0452}'),
    ("afii10100", '\u{0453}'),
    ("afii10101", '\u{0454}'),
    ("afii10102", '\u{0455}'),
    ("afii10103", '\u{0456}'),
    ("afii10104", '\u{0457}'),
    ("afii10105", '\u{0458}'),
    ("afii10106", '\u{0459}'),
    ("afii10107", '\u{045a}'),
    ("afii10108", '\u{045b}'),
    ("afii10109", '\u{045c}'),
    ("afii10110", '\u{045e}'),
    ("afii10145", '\u{040f}'),
    ("afii10146", '\u{0462}'),
    ("afii10147", '\u{0472}'),
    ("afii10148", '\u{0474}'),
    ("afii10192", '\u{f6c6}'),
    ("afii10193", '\u{045f}'),
    ("afii10194", '\u{0463}'),
    ("afii10195", '\u{0473}'),
    ("afii10196", '\u{0475}'),
    ("afii10831", '\u{f6c7}'),
    ("afii10832", '\u{f6c8}'),
    ("afii10846", '\u{04d9}'),
    ("afii299", '\u{200e}'),
    ("afii300", '\u{200f}'),
    ("afii301", '\u{200d}'),
    ("afii57381", '\u{066a}'),
    ("afii57388", '\u{060c}'),
    ("afii57392", '\u{0660}'),
    ("afii57393", '\u{0661}'),
    ("afii57394", '\u{0662}'),
    ("afii57395", '\u{0663}'),
    ("afii57396", '\u{0664}'),
    ("afii57397", '\u{0665}'),
    ("afii57398", '\u{0666}'),
    ("afii57399", '\u{0667}'),
    ("afii57400", '\u{0668}'),
    ("afii57401", '\u{0669}'),
    ("afii57403", '\u{061b}'),
    ("afii57407", '\u{061f}'),
    ("afii57409", '\u{0621}'),
    ("afii57410", '\u{0622}'),
    ("afii57411", '\u{0623}'),
    ("afii57412", '\u{0624}'),
    ("afii57413", '\u{0625}'),
    ("afii57414", '\u{0626}'),
    ("afii57415", '\u{0627}'),
    ("afii57416", '\u{0628}'),
    ("afii57417", '\u{0629}'),
    ("afii57418", '\u{062a}'),
    ("afii57419", '\u{062b}'),
    ("afii57420", '\u{062c}'),
    ("afii57421", '\u{062d}'),
    ("afii57422", '\u{062e}'),
    ("afii57423", '\u{062f}'),
    ("afii57424", '\u{0630}'),
    ("afii57425", '\u{0631}'),
    ("afii57426", '\u{0632}'),
    ("afii57427", '\u{0633}'),
    ("afii57428", '\u{0634}'),
    ("afii57429", '\u{0635}'),
    ("afii57430", '\u{0636}'),
    ("afii57431", '\u{0637}'),
    ("afii57432", '\u{0638}'),
    ("afii57433", '\u{0639}'),
    ("afii57434", '\u{063a}'),
    ("afii57440", '\u{0640}'),
    ("afii57441", '\u{0641}'),
    ("afii57442", '\u{0642}'),
    ("afii57443", '\u{0643}'),
    ("afii57444", '\u{0644}'),
    ("afii57445", '\u{0645}'),
    ("afii57446", '\u{0646}'),
    ("afii57448", '\u{0648}'),
    ("afii57449", '\u{0649}'),
    ("afii57450", '\u{064a}'),
    ("afii57451", '\u{064b}'),
    ("afii57452", '\u{064c}'),
    ("afii57453", '\u{064d}'),
    ("afii57454", '\u{064e}'),
    ("afii57455", '\u{064f}'),
    ("afii57456", '\u{0650}'),
    ("afii57457", '\u{0651}'),
    ("afii57458", '\u{0652}'),
    ("afii57470", '\u{0647}'),
    ("afii57505", '\u{06a4}'),
    ("afii57506", '\u{067e}'),
    ("afii57507", '\u{0686}'),
    ("afii57508", '\u{0698}'),
    ("afii57509", '\u{06af}'),
    ("afii57511", '\u{0679}'),
    ("afii57512", '\u{0688}'),
    ("afii57513", '\u{0691}'),
    ("afii57514", '\u{06ba}'),
    ("afii57519", '\u{06d2}'),
    ("afii57534", '\u{06d5}'),
    ("afii57636", '\u{20aa}'),
    ("afii57645", '\u{05be}'),
    ("afii57658", '\u{05c3}'),
    ("afii57664", '\u{05d0}'),
    ("afii57665", '\u{05d1}'),
    ("afii57666", '\u{05d2}'),
    ("afii57667", '\u{05d3}'),
    ("afii57668", '\u{05d4}'),
    ("afii57669", '\u{05d5}'),
    ("afii57670", '\u{05d6}'),
    ("afii57671", '\u{05d7}'),
    ("afii57672", '\u{05d8}'),
    ("afii57673", '\u{05d9}'),
    ("afii57674", '\u{05da}'),
    ("afii57675", '\u{05db}'),
    ("afii57676", '\u{05dc}'),
    ("afii57677", '\u{05dd}'),
    ("afii57678", '\u{05de}'),
    ("afii57679", '\u{05df}'),
    ("afii57680", '\u{05e0}'),
    ("afii57681", '\u{05e1}'),
    ("afii57682", '\u{05e2}'),
    ("afii57683", '\u{05e3}'),
    ("afii57684", '\u{05e4}'),
    ("afii57685", '\u{05e5}'),
    ("afii57686", '\u{05e6}'),
    ("afii57687", '\u{05e7}'),
    ("afii57688", '\u{05e8}'),
    ("afii57689", '\u{05e9}'),
    ("afii57690", '\u{05ea}'),
    ("afii57694", '\u{fb2a}'),
    ("afii57695", '\u{fb2b}'),
    ("afii57700", '\u{fb4b}'),
    ("afii57705", '\u{fb1f}'),
    ("afii57716", '\u{05f0}'),
    ("afii57717", '\u{05f1}'),
    ("afii57718", '\u{05f2}'),
    ("afii57723", '\u{fb35}'),
    ("afii57793", '\u{05b4}'),
    ("afii57794", '\u{05b5}'),
    ("afii57795", '\u{05b6}'),
    ("afii57796", '\u{05bb}'),
    ("afii57797", '\u{05b8}'),
    ("afii57798", '\u{05b7}'),
    ("afii57799", '\u{05b0}'),
    ("afii57800", '\u{05b2}'),
    ("afii57801", '\u{05b1}'),
    ("afii57802", '\u{05b3}'),
    ("afii57803", '\u{05c2}'),
    ("afii57804", '\u{05c1}'),
    ("afii57806", '\u{05b9}'),
    ("afii57807", '\u{05bc}'),
    ("afii57839", '\u{05bd}'),
    ("afii57841", '\u{05bf}'),
    ("afii57842", '\u{05c0}'),
    ("afii57929", '\u{02bc}'),
    ("afii61248", '\u{2105}'),
    ("afii61289", '\u{2113}'),
    ("afii61352", '\u{2116}'),
    ("afii61573", '\u{202c}'),
    ("afii61574", '\u{202d}'),
    ("afii61575", '\u{202e}'),
    ("afii61664", '\u{200c}'),
    ("afii63167", '\u{066d}'),
    ("afii64937", '\u{02bd}'),
    ("agrave", '\u{00e0}'),
    ("agujarati", '\u{0a85}'),
    ("agurmukhi", '\u{0a05}'),
    ("ahiragana", '\u{3042}'),
    ("ahookabove", '\u{1ea3}'),
    ("aibengali", '\u{0990}'),
    ("aibopomofo", '\u{311e}'),
    ("aideva", '\u{0910}'),
    ("aiecyrillic", '\u{04d5}'),
    ("aigujarati", '\u{0a90}'),
    ("aigurmukhi", '\u{0a10}'),
    ("aimatragurmukhi", '\u{0a48}'),
    ("ainarabic", '\u{0639}'),
    ("ainfinalarabic", '\u{feca}'),
    ("aininitialarabic", '\u{fecb}'),
    ("ainmedialarabic", '\u{fecc}'),
    ("ainvertedbreve", '\u{0203}'),
    ("aivowelsignbengali", '\u{09c8}'),
    ("aivowelsigndeva", '\u{0948}'),
    ("aivowelsigngujarati", '\u{0ac8}'),
    ("akatakana", '\u{30a2}'),
    ("akatakanahalfwidth", '\u{ff71}'),
    ("akorean", '\u{314f}'),
    ("alef", '\u{05d0}'),
    ("alefarabic", '\u{0627}'),
    ("alefdageshhebrew", '\u{fb30}'),
    ("aleffinalarabic", '\u{fe8e}'),
    ("alefhamzaabovearabic", '\u{0623}'),
    ("alefhamzaabovefinalarabic", '\u{fe84}'),
    ("alefhamzabelowarabic", '\u{0625}'),
    ("alefhamzabelowfinalarabic", '\u{fe88}'),
    ("alefhebrew", '\u{05d0}'),
    ("aleflamedhebrew", '\u{fb4f}'),
    ("alefmaddaabovearabic", '\u{0622}'),
    ("alefmaddaabovefinalarabic", '\u{fe82}'),
    ("alefmaksuraarabic", '\u{0649}'),
    ("alefmaksurafinalarabic", '\u{fef0}'),
    ("alefmaksurainitialarabic", '\u{fef3}'),
    ("alefmaksuramedialarabic", '\u{fef4}'),
    ("alefpatahhebrew", '\u{fb2e}'),
    ("alefqamatshebrew", '\u{fb2f}'),
    ("aleph", '\u{2135}'),
    ("allequal", '\u{224c}'),
    ("alpha", '\u{03b1}'),
    ("alphatonos", '\u{03ac}'),
    ("amacron", '\u{0101}'),
    ("amonospace", '\u{ff41}'),
    ("ampersand", '\u{0026}'),
    ("ampersandmonospace", '\u{ff06}'),
    ("ampersandsmall", '\u{f726}'),
    ("amsquare", '\u{33c2}'),
    ("anbopomofo", '\u{3122}'),
    ("angbopomofo", '\u{3124}'),
    ("angbracketleft", '\u{27e8}'),
    ("angbracketright", '\u{27e9}'),
    ("angkhankhuthai", '\u{0e5a}'),
    ("angle", '\u{2220}'),
    ("anglebracketleft", '\u{3008}'),
    ("anglebracketleftvertical", '\u{fe3f}'),
    ("anglebracketright", '\u{3009}'),
    ("anglebracketrightvertical", '\u{fe40}'),
    ("angleleft", '\u{2329}'),
    ("angleleftBig", '\u{2329}'),
    ("angleleftBigg", '\u{2329}'),
    ("angleleftbig", '\u{2329}'),
    ("angleleftbigg", '\u{2329}'),
    ("angleright", '\u{232a}'),
    ("anglerightBig", '\u{232a}'),
    ("anglerightBigg", '\u{232a}'),
    ("anglerightbig", '\u{232a}'),
    ("anglerightbigg", '\u{232a}'),
    ("angstrom", '\u{212b}'),
    ("anoteleia", '\u{0387}'),
    ("anudattadeva", '\u{0952}'),
    ("anusvarabengali", '\u{0982}'),
    ("anusvaradeva", '\u{0902}'),
    ("anusvaragujarati", '\u{0a82}'),
    ("aogonek", '\u{0105}'),
    ("apaatosquare", '\u{3300}'),
    ("aparen", '\u{249c}'),
    ("apostrophearmenian", '\u{055a}'),
    ("apostrophemod", '\u{02bc}'),
    ("apple", '\u{f8ff}'),
    ("approaches", '\u{2250}'),
    ("approxequal", '\u{2248}'),
    ("approxequalorimage", '\u{2252}'),
    ("approximatelyequal", '\u{2245}'),
    ("araeaekorean", '\u{318e}'),
    ("araeakorean", '\u{318d}'),
    ("arc", '\u{2312}'),
    ("arighthalfring", '\u{1e9a}'),
    ("aring", '\u{00e5}'),
    ("aringacute", '\u{01fb}'),
    ("aringbelow", '\u{1e01}'),
    ("arrowboth", '\u{2194}'),
    ("arrowbothv", '\u{2195}'),
    ("arrowbt", '\u{2193}'),
    ("arrowdashdown", '\u{21e3}'),
    ("arrowdashleft", '\u{21e0}'),
    ("arrowdashright", '\u{21e2}'),
    ("arrowdashup", '\u{21e1}'),
    ("arrowdblboth", '\u{21d4}'),
    ("arrowdblbothv", '\u{21d5}'),
    ("arrowdbldown", '\u{21d3}'),
    ("arrowdblleft", '\u{21d0}'),
    ("arrowdblright", '\u{21d2}'),
    ("arrowdbltp", '\u{21d1}'),
    ("arrowdblup", '\u{21d1}'),
    ("arrowdblvertex", '\u{21d5}'),
    ("arrowdown", '\u{2193}'),
    ("arrowdownleft", '\u{2199}'),
    ("arrowdownright", '\u{2198}'),
    ("arrowdownwhite", '\u{21e9}'),
    ("arrowheaddownmod", '\u{02c5}'),
    ("arrowheadleftmod", '\u{02c2}'),
    ("arrowheadrightmod", '\u{02c3}'),
    ("arrowheadupmod", '\u{02c4}'),
    ("arrowhorizex", '\u{f8e7}'),
    ("arrowleft", '\u{2190}'),
    ("arrowleftbothalf", '\u{21bd}'),
    ("arrowleftdbl", '\u{21d0}'),
    ("arrowleftdblstroke", '\u{21cd}'),
    ("arrowleftoverright", '\u{21c6}'),
    ("arrowlefttophalf", '\u{21bc}'),
    ("arrowleftwhite", '\u{21e6}'),
    ("arrownortheast", '\u{2197}'),
    ("arrownorthwest", '\u{2196}'),
    ("arrowright", '\u{2192}'),
    ("arrowrightbothalf", '\u{21c1}'),
    ("arrowrightdblstroke", '\u{21cf}'),
    ("arrowrightheavy", '\u{279e}'),
    ("arrowrightoverleft", '\u{21c4}'),
    ("arrowrighttophalf", '\u{21c0}'),
    ("arrowrightwhite", '\u{21e8}'),
    ("arrowsoutheast", '\u{2198}'),
    ("arrowsouthwest", '\u{2199}'),
    ("arrowtableft", '\u{21e4}'),
    ("arrowtabright", '\u{21e5}'),
    ("arrowtp", '\u{2191}'),
    ("arrowup", '\u{2191}'),
    ("arrowupdn", '\u{2195}'),
    ("arrowupdnbse", '\u{21a8}'),
    ("arrowupdownbase", '\u{21a8}'),
    ("arrowupleft", '\u{2196}'),
    ("arrowupleftofdown", '\u{21c5}'),
    ("arrowupright", '\u{2197}'),
    ("arrowupwhite", '\u{21e7}'),
    ("arrowvertex", '\u{2195}'),
    ("arrowvertex2", '\u{f8e6}'),
    ("asciicircum", '\u{005e}'),
    ("asciicircummonospace", '\u{ff3e}'),
    ("asciitilde", '\u{007e}'),
    ("asciitildemonospace", '\u{ff5e}'),
    ("ascript", '\u{0251}'),
    ("ascriptturned", '\u{0252}'),
    ("asmallhiragana", '\u{3041}'),
    ("asmallkatakana", '\u{30a1}'),
    ("asmallkatakanahalfwidth", '\u{ff67}'),
    ("asterisk", '\u{002a}'),
    ("asteriskaltonearabic", '\u{066d}'),
    ("asteriskarabic", '\u{066d}'),
    ("asteriskcentered", '\u{2217}'),
    ("asteriskmath", '\u{2217}'),
    ("asteriskmonospace", '\u{ff0a}'),
    ("asterisksmall", '\u{fe61}'),
    ("asterism", '\u{2042}'),
    ("asuperior", '\u{f6e9}'),
    ("asymptoticallyequal", '\u{2243}'),
    ("at", '\u{0040}'),
    ("atilde", '\u{00e3}'),
    ("atmonospace", '\u{ff20}'),
    ("atsmall", '\u{fe6b}'),
    ("aturned", '\u{0250}'),
    ("aubengali", '\u{0994}'),
    ("aubopomofo", '\u{3120}'),
    ("audeva", '\u{0914}'),
    ("augujarati", '\u{0a94}'),
    ("augurmukhi", '\u{0a14}'),
    ("aulengthmarkbengali", '\u{09d7}'),
    ("aumatragurmukhi", '\u{0a4c}'),
    ("auvowelsignbengali", '\u{09cc}'),
    ("auvowelsigndeva", '\u{094c}'),
    ("auvowelsigngujarati", '\u{0acc}'),
    ("avagrahadeva", '\u{093d}'),
    ("aybarmenian", '\u{0561}'),
    ("ayin", '\u{05e2}'),
    ("ayinaltonehebrew", '\u{fb20}'),
    ("ayinhebrew", '\u{05e2}'),
    ("b", '\u{0062}'),
    ("babengali", '\u{09ac}'),
    ("backslash", '\u{005c}'),
    ("backslashBig", '\u{005c}'),
    ("backslashBigg", '\u{005c}'),
    ("backslashbig", '\u{005c}'),
    ("backslashbigg", '\u{005c}'),
    ("backslashmonospace", '\u{ff3c}'),
    ("badeva", '\u{092c}'),
    ("bagujarati", '\u{0aac}'),
    ("bagurmukhi", '\u{0a2c}'),
    ("bahiragana", '\u{3070}'),
    ("bahtthai", '\u{0e3f}'),
    ("bakatakana", '\u{30d0}'),
    ("bar", '\u{007c}'),
    ("bardbl", '\u{2225}'),
    ("bardblex", '\u{2016}'),
    ("barex", '\u{007c}'),
    ("barmonospace", '\u{ff5c}'),
    ("bbopomofo", '\u{3105}'),
    ("bcircle", '\u{24d1}'),
    ("bdotaccent", '\u{1e03}'),
    ("bdotbelow", '\u{1e05}'),
    ("beamedsixteenthnotes", '\u{266c}'),
    ("because", '\u{2235}'),
    ("becyrillic", '\u{0431}'),
    ("beharabic", '\u{0628}'),
    ("behfinalarabic", '\u{fe90}'),
    ("behinitialarabic", '\u{fe91}'),
    ("behiragana", '\u{3079}'),
    ("behmedialarabic", '\u{fe92}'),
    ("behmeeminitialarabic", '\u{fc9f}'),
    ("behmeemisolatedarabic", '\u{fc08}'),
    ("behnoonfinalarabic", '\u{fc6d}'),
    ("bekatakana", '\u{30d9}'),
    ("benarmenian", '\u{0562}'),
    ("bet", '\u{05d1}'),
    ("beta", '\u{03b2}'),
    ("betasymbolgreek", '\u{03d0}'),
    ("betdagesh", '\u{fb31}'),
    ("betdageshhebrew", '\u{fb31}'),
    ("bethebrew", '\u{05d1}'),
    ("betrafehebrew", '\u{fb4c}'),
    ("bhabengali", '\u{09ad}'),
    ("bhadeva", '\u{092d}'),
    ("bhagujarati", '\u{0aad}'),
    ("bhagurmukhi", '\u{0a2d}'),
    ("bhook", '\u{0253}'),
    ("bihiragana", '\u{3073}'),
    ("bikatakana", '\u{30d3}'),
    ("bilabialclick", '\u{0298}'),
    ("bindigurmukhi", '\u{0a02}'),
    ("birusquare", '\u{3331}'),
    ("blackcircle", '\u{25cf}'),
    ("blackdiamond", '\u{25c6}'),
    ("blackdownpointingtriangle", '\u{25bc}'),
    ("blackleftpointingpointer", '\u{25c4}'),
    ("blackleftpointingtriangle", '\u{25c0}'),
    ("blacklenticularbracketleft", '\u{3010}'),
    ("blacklenticularbracketleftvertical", '\u{fe3b}'),
    ("blacklenticularbracketright", '\u{3011}'),
    ("blacklenticularbracketrightvertical", '\u{fe3c}'),
    ("blacklowerlefttriangle", '\u{25e3}'),
    ("blacklowerrighttriangle", '\u{25e2}'),
    ("blackrectangle", '\u{25ac}'),
    ("blackrightpointingpointer", '\u{25ba}'),
    ("blackrightpointingtriangle", '\u{25b6}'),
    ("blacksmallsquare", '\u{25aa}'),
    ("blacksmilingface", '\u{263b}'),
    ("blacksquare", '\u{25a0}'),
    ("blackstar", '\u{2605}'),
    ("blackupperlefttriangle", '\u{25e4}'),
    ("blackupperrighttriangle", '\u{25e5}'),
    ("blackuppointingsmalltriangle", '\u{25b4}'),
    ("blackuppointingtriangle", '\u{25b2}'),
    ("blank", '\u{2423}'),
    ("blinebelow", '\u{1e07}'),
    ("block", '\u{2588}'),
    ("bmonospace", '\u{ff42}'),
    ("bobaimaithai", '\u{0e1a}'),
    ("bohiragana", '\u{307c}'),
    ("bokatakana", '\u{30dc}'),
    ("bparen", '\u{249d}'),
    ("bqsquare", '\u{33c3}'),
    ("braceex", '\u{007c}'),
    ("braceex2", '\u{f8f4}'),
    ("braceleft", '\u{007b}'),
    ("braceleftBig", '\u{007b}'),
    ("braceleftBigg", '\u{007b}'),
    ("braceleftbig", '\u{007b}'),
    ("braceleftbigg", '\u{007b}'),
    ("braceleftbt", '\u{f8f3}'),
    ("braceleftmid", '\u{007c}'),
    ("braceleftmid2", '\u{f8f2}'),
    ("braceleftmonospace", '\u{ff5b}'),
    ("braceleftsmall", '\u{fe5b}'),
    ("bracelefttp", '\u{f8f1}'),
    ("braceleftvertical", '\u{fe37}'),
    ("braceright", '\u{007d}'),
    ("bracerightBig", '\u{007d}'),
    ("bracerightBigg", '\u{007d}'),
    ("bracerightbig", '\u{007d}'),
    ("bracerightbigg", '\u{007d}'),
    ("bracerightbt", '\u{f8fe}'),
    ("bracerightmid", '\u{2016}'),
    ("bracerightmid2", '\u{f8fd}'),
    ("bracerightmonospace", '\u{ff5d}'),
    ("bracerightsmall", '\u{fe5c}'),
    ("bracerighttp", '\u{f8fc}'),
    ("bracerightvertical", '\u{fe38}'),
    ("bracketleft", '\u{005b}'),
    ("bracketleftBig", '\u{005b}'),
    ("bracketleftBigg", '\u{005b}'),
    ("bracketleftbig", '\u{005b}'),
    ("bracketleftbigg", '\u{005b}'),
    ("bracketleftbt", '\u{f8f0}'),
    ("bracketleftex", '\u{f8ef}'),
    ("bracketleftmonospace", '\u{ff3b}'),
    ("bracketlefttp", '\u{f8ee}'),
    ("bracketright", '\u{005d}'),
    ("bracketrightBig", '\u{005d}'),
    ("bracketrightBigg", '\u{005d}'),
    ("bracketrightbig", '\u{005d}'),
    ("bracketrightbigg", '\u{005d}'),
    ("bracketrightbt", '\u{f8fb}'),
    ("bracketrightex", '\u{f8fa}'),
    ("bracketrightmonospace", '\u{ff3d}'),
    ("bracketrighttp", '\u{f8f9}'),
    ("breve", '\u{02d8}'),
    ("brevebelowcmb", '\u{032e}'),
    ("brevecmb", '\u{0306}'),
    ("breveinvertedbelowcmb", '\u{032f}'),
    ("breveinvertedcmb", '\u{0311}'),
    ("breveinverteddoublecmb", '\u{0361}'),
    ("bridgebelowcmb", '\u{032a}'),
    ("bridgeinvertedbelowcmb", '\u{033a}'),
    ("brokenbar", '\u{00a6}'),
    ("bstroke", '\u{0180}'),
    ("bsuperior", '\u{f6ea}'),
    ("btopbar", '\u{0183}'),
    ("buhiragana", '\u{3076}'),
    ("bukatakana", '\u{30d6}'),
    ("bullet", '\u{2022}'),
    ("bulletinverse", '\u{25d8}'),
    ("bulletoperator", '\u{2219}'),
    ("bullseye", '\u{25ce}'),
    ("c", '\u{0063}'),
    ("caarmenian", '\u{056e}'),
    ("cabengali", '\u{099a}'),
    ("cacute", '\u{0107}'),
    ("cadeva", '\u{091a}'),
    ("cagujarati", '\u{0a9a}'),
    ("cagurmukhi", '\u{0a1a}'),
    ("calsquare", '\u{3388}'),
    ("candrabindubengali", '\u{0981}'),
    ("candrabinducmb", '\u{0310}'),
    ("candrabindudeva", '\u{0901}'),
    ("candrabindugujarati", '\u{0a81}'),
    ("capslock", '\u{21ea}'),
    ("careof", '\u{2105}'),
    ("caron", '\u{02c7}'),
    ("caronbelowcmb", '\u{032c}'),
    ("caroncmb", '\u{030c}'),
    ("carriagereturn", '\u{21b5}'),
    ("cbopomofo", '\u{3118}'),
    ("ccaron", '\u{010d}'),
    ("ccedilla", '\u{00e7}'),
    ("ccedillaacute", '\u{1e09}'),
    ("ccircle", '\u{24d2}'),
    ("ccircumflex", '\u{0109}'),
    ("ccurl", '\u{0255}'),
    ("cdot", '\u{010b}'),
    ("cdotaccent", '\u{010b}'),
    ("cdsquare", '\u{33c5}'),
    ("cedilla", '\u{00b8}'),
    ("cedillacmb", '\u{0327}'),
    ("ceilingleft", '\u{2308}'),
    ("ceilingleftBig", '\u{2308}'),
    ("ceilingleftBigg", '\u{2308}'),
    ("ceilingleftbig", '\u{2308}'),
    ("ceilingleftbigg", '\u{2308}'),
    ("ceilingright", '\u{2309}'),
    ("ceilingrightBig", '\u{2309}'),
    ("ceilingrightBigg", '\u{2309}'),
    ("ceilingrightbig", '\u{2309}'),
    ("ceilingrightbigg", '\u{2309}'),
    ("cent", '\u{00a2}'),
    ("centigrade", '\u{2103}'),
    ("centinferior", '\u{f6df}'),
    ("centmonospace", '\u{ffe0}'),
    ("centoldstyle", '\u{f7a2}'),
    ("centsuperior", '\u{f6e0}'),
    ("chaarmenian", '\u{0579}'),
    ("chabengali", '\u{099b}'),
    ("chadeva", '\u{091b}'),
    ("chagujarati", '\u{0a9b}'),
    ("chagurmukhi", '\u{0a1b}'),
    ("chbopomofo", '\u{3114}'),
    ("cheabkhasiancyrillic", '\u{04bd}'),
    ("checkmark", '\u{2713}'),
    ("checyrillic", '\u{0447}'),
    ("chedescenderabkhasiancyrillic", '\u{04bf}'),
    ("chedescendercyrillic", '\u{04b7}'),
    ("chedieresiscyrillic", '\u{04f5}'),
    ("cheharmenian", '\u{0573}'),
    ("chekhakassiancyrillic", '\u{04cc}'),
    ("cheverticalstrokecyrillic", '\u{04b9}'),
    ("chi", '\u{03c7}'),
    ("chieuchacirclekorean", '\u{3277}'),
    ("chieuchaparenkorean", '\u{3217}'),
    ("chieuchcirclekorean", '\u{3269}'),
    ("chieuchkorean", '\u{314a}'),
    ("chieuchparenkorean", '\u{3209}'),
    ("chochangthai", '\u{0e0a}'),
    ("chochanthai", '\u{0e08}'),
    ("chochingthai", '\u{0e09}'),
    ("chochoethai", '\u{0e0c}'),
    ("chook", '\u{0188}'),
    ("cieucacirclekorean", '\u{3276}'),
    ("cieucaparenkorean", '\u{3216}'),
    ("cieuccirclekorean", '\u{3268}'),
    ("cieuckorean", '\u{3148}'),
    ("cieucparenkorean", '\u{3208}'),
    ("cieucuparenkorean", '\u{321c}'),
    ("circle", '\u{25cb}'),
    ("circlecopyrt", '\u{20dd}'),
    ("circledivide", '\u{2298}'),
    ("circledot", '\u{2299}'),
    ("circledotdisplay", '\u{2299}'),
    ("circledottext", '\u{2299}'),
    ("circleminus", '\u{2296}'),
    ("circlemultiply", '\u{2297}'),
    ("circlemultiplydisplay", '\u{2297}'),
    ("circlemultiplytext", '\u{2297}'),
    ("circleot", '\u{2299}'),
    ("circleplus", '\u{2295}'),
    ("circleplusdisplay", '\u{2295}'),
    ("circleplustext", '\u{2295}'),
    ("circlepostalmark", '\u{3036}'),
    ("circlewithlefthalfblack", '\u{25d0}'),
    ("circlewithrighthalfblack", '\u{25d1}'),
    ("circumflex", '\u{02c6}'),
    ("circumflexbelowcmb", '\u{032d}'),
    ("circumflexcmb", '\u{0302}'),
    ("clear", '\u{2327}'),
    ("clickalveolar", '\u{01c2}'),
    ("clickdental", '\u{01c0}'),
    ("clicklateral", '\u{01c1}'),
    ("clickretroflex", '\u{01c3}'),
    ("club", '\u{2663}'),
    ("clubsuitblack", '\u{2663}'),
    ("clubsuitwhite", '\u{2667}'),
    ("cmcubedsquare", '\u{33a4}'),
    ("cmonospace", '\u{ff43}'),
    ("cmsquaredsquare", '\u{33a0}'),
    ("coarmenian", '\u{0581}'),
    ("colon", '\u{003a}'),
    ("colonmonetary", '\u{20a1}'),
    ("colonmonospace", '\u{ff1a}'),
    ("colonsign", '\u{20a1}'),
    ("colonsmall", '\u{fe55}'),
    ("colontriangularhalfmod", '\u{02d1}'),
    ("colontriangularmod", '\u{02d0}'),
    ("comma", '\u{002c}'),
    ("commaabovecmb", '\u{0313}'),
    ("commaaboverightcmb", '\u{0315}'),
    ("commaaccent", '\u{f6c3}'),
    ("commaarabic", '\u{060c}'),
    ("commaarmenian", '\u{055d}'),
    ("commainferior", '\u{f6e1}'),
    ("commamonospace", '\u{ff0c}'),
    ("commareversedabovecmb", '\u{0314}'),
    ("commareversedmod", '\u{02bd}'),
    ("commasmall", '\u{fe50}'),
    ("commasuperior", '\u{f6e2}'),
    ("commaturnedabovecmb", '\u{0312}'),
    ("commaturnedmod", '\u{02bb}'),
    ("compass", '\u{263c}'),
    ("compwordmark", '\u{200c}'),
    ("congruent", '\u{2245}'),
    ("contintegraldisplay", '\u{222e}'),
    ("contintegraltext", '\u{222e}'),
    ("contourintegral", '\u{222e}'),
    ("control", '\u{2303}'),
    ("controlACK", '\u{0006}'),
    ("controlBEL", '\u{0007}'),
    ("controlBS", '\u{0008}'),
    ("controlCAN", '\u{0018}'),
    ("controlCR", '\u{000d}'),
    ("controlDC1", '\u{0011}'),
    ("controlDC2", '\u{0012}'),
    ("controlDC3", '\u{0013}'),
    ("controlDC4", '\u{0014}'),
    ("controlDEL", '\u{007f}'),
    ("controlDLE", '\u{0010}'),
    ("controlEM", '\u{0019}'),
    ("controlENQ", '\u{0005}'),
    ("controlEOT", '\u{0004}'),
    ("controlESC", '\u{001b}'),
    ("controlETB", '\u{0017}'),
    ("controlETX", '\u{0003}'),
    ("controlFF", '\u{000c}'),
    ("controlFS", '\u{001c}'),
    ("controlGS", '\u{001d}'),
    ("controlHT", '\u{0009}'),
    ("controlLF", '\u{000a}'),
    ("controlNAK", '\u{0015}'),
    ("controlRS", '\u{001e}'),
    ("controlSI", '\u{000f}'),
    ("controlSO", '\u{000e}'),
    ("controlSOT", '\u{0002}'),
    ("controlSTX", '\u{0001}'),
    ("controlSUB", '\u{001a}'),
    ("controlSYN", '\u{0016}'),
    ("controlUS", '\u{001f}'),
    ("controlVT", '\u{000b}'),
    ("coproduct", '\u{2a3f}'),
    ("coproductdisplay", '\u{2210}'),
    ("coproducttext", '\u{2210}'),
    ("copyright", '\u{00a9}'),
    ("copyrightsans", '\u{f8e9}'),
    ("copyrightserif", '\u{f6d9}'),
    ("cornerbracketleft", '\u{300c}'),
    ("cornerbracketlefthalfwidth", '\u{ff62}'),
    ("cornerbracketleftvertical", '\u{fe41}'),
    ("cornerbracketright", '\u{300d}'),
    ("cornerbracketrighthalfwidth", '\u{ff63}'),
    ("cornerbracketrightvertical", '\u{fe42}'),
    ("corporationsquare", '\u{337f}'),
    ("cosquare", '\u{33c7}'),
    ("coverkgsquare", '\u{33c6}'),
    ("cparen", '\u{249e}'),
    ("cruzeiro", '\u{20a2}'),
    ("cstretched", '\u{0297}'),
    ("curlyand", '\u{22cf}'),
    ("curlyor", '\u{22ce}'),
    ("currency", '\u{00a4}'),
    ("cwm", '\u{200c}'),
    ("cyrBreve", '\u{f6d1}'),
    ("cyrFlex", '\u{f6d2}'),
    ("cyrbreve", '\u{f6d4}'),
    ("cyrflex", '\u{f6d5}'),
    ("d", '\u{0064}'),
    ("daarmenian", '\u{0564}'),
    ("dabengali", '\u{09a6}'),
    ("dadarabic", '\u{0636}'),
    ("dadeva", '\u{0926}'),
    ("dadfinalarabic", '\u{febe}'),
    ("dadinitialarabic", '\u{febf}'),
    ("dadmedialarabic", '\u{fec0}'),
    ("dagesh", '\u{05bc}'),
    ("dageshhebrew", '\u{05bc}'),
    ("dagger", '\u{2020}'),
    ("daggerdbl", '\u{2021}'),
    ("dagujarati", '\u{0aa6}'),
    ("dagurmukhi", '\u{0a26}'),
    ("dahiragana", '\u{3060}'),
    ("dakatakana", '\u{30c0}'),
    ("dalarabic", '\u{062f}'),
    ("dalet", '\u{05d3}'),
    ("daletdagesh", '\u{fb33}'),
    ("daletdageshhebrew", '\u{fb33}'),
    ("dalethatafpatah", '\u{05d3}'),
    ("dalethatafpatahhebrew", '\u{05d3}'),
    ("dalethatafsegol", '\u{05d3}'),
    ("dalethatafsegolhebrew", '\u{05d3}'),
    ("dalethebrew", '\u{05d3}'),
    ("dalethiriq", '\u{05d3}'),
    ("dalethiriqhebrew", '\u{05d3}'),
    ("daletholam", '\u{05d3}'),
    ("daletholamhebrew", '\u{05d3}'),
    ("daletpatah", '\u{05d3}'),
    ("daletpatahhebrew", '\u{05d3}'),
    ("daletqamats", '\u{05d3}'),
    ("daletqamatshebrew", '\u{05d3}'),
    ("daletqubuts", '\u{05d3}'),
    ("daletqubutshebrew", '\u{05d3}'),
    ("daletsegol", '\u{05d3}'),
    ("daletsegolhebrew", '\u{05d3}'),
    ("daletsheva", '\u{05d3}'),
    ("daletshevahebrew", '\u{05d3}'),
    ("dalettsere", '\u{05d3}'),
    ("dalettserehebrew", '\u{05d3}'),
    ("dalfinalarabic", '\u{feaa}'),
    ("dammaarabic", '\u{064f}'),
    ("dammalowarabic", '\u{064f}'),
    ("dammatanaltonearabic", '\u{064c}'),
    ("dammatanarabic", '\u{064c}'),
    ("danda", '\u{0964}'),
    ("dargahebrew", '\u{05a7}'),
    ("dargalefthebrew", '\u{05a7}'),
    ("dasiapneumatacyrilliccmb", '\u{0485}'),
    ("dbar", '\u{0111}'),
    ("dblGrave", '\u{f6d3}'),
    ("dblanglebracketleft", '\u{300a}'),
    ("dblanglebracketleftvertical", '\u{fe3d}'),
    ("dblanglebracketright", '\u{300b}'),
    ("dblanglebracketrightvertical", '\u{fe3e}'),
    ("dblarchinvertedbelowcmb", '\u{032b}'),
    ("dblarrowleft", '\u{21d4}'),
    ("dblarrowright", '\u{21d2}'),
    ("dblbracketleft", '\u{27e6}'),
    ("dblbracketright", '\u{27e7}'),
    ("dbldanda", '\u{0965}'),
    ("dblgrave", '\u{f6d6}'),
    ("dblgravecmb", '\u{030f}'),
    ("dblintegral", '\u{222c}'),
    ("dbllowline", '\u{2017}'),
    ("dbllowlinecmb", '\u{0333}'),
    ("dbloverlinecmb", '\u{033f}'),
    ("dblprimemod", '\u{02ba}'),
    ("dblverticalbar", '\u{2016}'),
    ("dblverticallineabovecmb", '\u{030e}'),
    ("dbopomofo", '\u{3109}'),
    ("dbsquare", '\u{33c8}'),
    ("dcaron", '\u{010f}'),
    ("dcedilla", '\u{1e11}'),
    ("dcircle", '\u{24d3}'),
    ("dcircumflexbelow", '\u{1e13}'),
    ("dcroat", '\u{0111}'),
    ("ddabengali", '\u{09a1}'),
    ("ddadeva", '\u{0921}'),
    ("ddagujarati", '\u{0aa1}'),
    ("ddagurmukhi", '\u{0a21}'),
    ("ddalarabic", '\u{0688}'),
    ("ddalfinalarabic", '\u{fb89}'),
    ("dddhadeva", '\u{095c}'),
    ("ddhabengali", '\u{09a2}'),
    ("ddhadeva", '\u{0922}'),
    ("ddhagujarati", '\u{0aa2}'),
    ("ddhagurmukhi", '\u{0a22}'),
    ("ddotaccent", '\u{1e0b}'),
    ("ddotbelow", '\u{1e0d}'),
    ("decimalseparatorarabic", '\u{066b}'),
    ("decimalseparatorpersian", '\u{066b}'),
    ("decyrillic", '\u{0434}'),
    ("degree", '\u{00b0}'),
    ("dehihebrew", '\u{05ad}'),
    ("dehiragana", '\u{3067}'),
    ("deicoptic", '\u{03ef}'),
    ("dekatakana", '\u{30c7}'),
    ("deleteleft", '\u{232b}'),
    ("deleteright", '\u{2326}'),
    ("delta", '\u{03b4}'),
    ("deltaturned", '\u{018d}'),
    ("denominatorminusonenumeratorbengali", '\u{09f8}'),
    ("dezh", '\u{02a4}'),
    ("dhabengali", '\u{09a7}'),
    ("dhadeva", '\u{0927}'),
    ("dhagujarati", '\u{0aa7}'),
    ("dhagurmukhi", '\u{0a27}'),
    ("dhook", '\u{0257}'),
    ("dialytikatonos", '\u{0385}'),
    ("dialytikatonoscmb", '\u{0344}'),
    ("diamond", '\u{2662}'),
    ("diamond2", '\u{2666}'),
    ("diamondmath", '\u{22c4}'),
    ("diamondsuitwhite", '\u{2662}'),
    ("dieresis", '\u{00a8}'),
    ("dieresisacute", '\u{f6d7}'),
    ("dieresisbelowcmb", '\u{0324}'),
    ("dieresiscmb", '\u{0308}'),
    ("dieresisgrave", '\u{f6d8}'),
    ("dieresistonos", '\u{0385}'),
    ("dihiragana", '\u{3062}'),
    ("dikatakana", '\u{30c2}'),
    ("dittomark", '\u{3003}'),
    ("divide", '\u{00f7}'),
    ("divides", '\u{2223}'),
    ("divisionslash", '\u{2215}'),
    ("djecyrillic", '\u{0452}'),
    ("dkshade", '\u{2593}'),
    ("dlinebelow", '\u{1e0f}'),
    ("dlsquare", '\u{3397}'),
    ("dmacron", '\u{0111}'),
    ("dmonospace", '\u{ff44}'),
    ("dnblock", '\u{2584}'),
    ("dochadathai", '\u{0e0e}'),
    ("dodekthai", '\u{0e14}'),
    ("dohiragana", '\u{3069}'),
    ("dokatakana", '\u{30c9}'),
    ("dollar", '\u{0024}'),
    ("dollarinferior", '\u{f6e3}'),
    ("dollarmonospace", '\u{ff04}'),
    ("dollaroldstyle", '\u{f724}'),
    ("dollarsmall", '\u{fe69}'),
    ("dollarsuperior", '\u{f6e4}'),
    ("dong", '\u{20ab}'),
    ("dorusquare", '\u{3326}'),
    ("dotaccent", '\u{02d9}'),
    ("dotaccentcmb", '\u{0307}'),
    ("dotbelowcmb", '\u{0323}'),
    ("dotbelowcomb", '\u{0323}'),
    ("dotkatakana", '\u{30fb}'),
    ("dotlessi", '\u{0131}'),
    ("dotlessj", '\u{0237}'),
    ("dotlessj2", '\u{f6be}'),
    ("dotlessjstrokehook", '\u{0284}'),
    ("dotmath", '\u{22c5}'),
    ("dottedcircle", '\u{25cc}'),
    ("doubleyodpatah", '\u{fb1f}'),
    ("doubleyodpatahhebrew", '\u{fb1f}'),
    ("downtackbelowcmb", '\u{031e}'),
    ("downtackmod", '\u{02d5}'),
    ("dparen", '\u{249f}'),
    ("dsuperior", '\u{f6eb}'),
    ("dtail", '\u{0256}'),
    ("dtopbar", '\u{018c}'),
    ("duhiragana", '\u{3065}'),
    ("dukatakana", '\u{30c5}'),
    ("dz", '\u{01f3}'),
    ("dzaltone", '\u{02a3}'),
    ("dzcaron", '\u{01c6}'),
    ("dzcurl", '\u{02a5}'),
    ("dzeabkhasiancyrillic", '\u{04e1}'),
    ("dzecyrillic", '\u{0455}'),
    ("dzhecyrillic", '\u{045f}'),
    ("e", '\u{0065}'),
    ("eacute", '\u{00e9}'),
    ("earth", '\u{2641}'),
    ("ebengali", '\u{098f}'),
    ("ebopomofo", '\u{311c}'),
    ("ebreve", '\u{0115}'),
    ("ecandradeva", '\u{090d}'),
    ("ecandragujarati", '\u{0a8d}'),
    ("ecandravowelsigndeva", '\u{0945}'),
    ("ecandravowelsigngujarati", '\u{0ac5}'),
    ("ecaron", '\u{011b}'),
    ("ecedillabreve", '\u{1e1d}'),
    ("echarmenian", '\u{0565}'),
    ("echyiwnarmenian", '\u{0587}'),
    ("ecircle", '\u{24d4}'),
    ("ecircumflex", '\u{00ea}'),
    ("ecircumflexacute", '\u{1ebf}'),
    ("ecircumflexbelow", '\u{1e19}'),
    ("ecircumflexdotbelow", '\u{1ec7}'),
    ("ecircumflexgrave", '\u{1ec1}'),
    ("ecircumflexhookabove", '\u{1ec3}'),
    ("ecircumflextilde", '\u{1ec5}'),
    ("ecyrillic", '\u{0454}'),
    ("edblgrave", '\u{0205}'),
    ("edeva", '\u{090f}'),
    ("edieresis", '\u{00eb}'),
    ("edot", '\u{0117}'),
    ("edotaccent", '\u{0117}'),
    ("edotbelow", '\u{1eb9}'),
    ("eegurmukhi", '\u{0a0f}'),
    ("eematragurmukhi", '\u{0a47}'),
    ("efcyrillic", '\u{0444}'),
    ("egrave", '\u{00e8}'),
    ("egujarati", '\u{0a8f}'),
    ("eharmenian", '\u{0567}'),
    ("ehbopomofo", '\u{311d}'),
    ("ehiragana", '\u{3048}'),
    ("ehookabove", '\u{1ebb}'),
    ("eibopomofo", '\u{311f}'),
    ("eight", '\u{0038}'),
    ("eightarabic", '\u{0668}'),
    ("eightbengali", '\u{09ee}'),
    ("eightcircle", '\u{2467}'),
    ("eightcircleinversesansserif", '\u{2791}'),
    ("eightdeva", '\u{096e}'),
    ("eighteencircle", '\u{2471}'),
    ("eighteenparen", '\u{2485}'),
    ("eighteenperiod", '\u{2499}'),
    ("eightgujarati", '\u{0aee}'),
    ("eightgurmukhi", '\u{0a6e}'),
    ("eighthackarabic", '\u{0668}'),
    ("eighthangzhou", '\u{3028}'),
    ("eighthnotebeamed", '\u{266b}'),
    ("eightideographicparen", '\u{3227}'),
    ("eightinferior", '\u{2088}'),
    ("eightmonospace", '\u{ff18}'),
    ("eightoldstyle", '\u{f738}'),
    ("eightparen", '\u{247b}'),
    ("eightperiod", '\u{248f}'),
    ("eightpersian", '\u{06f8}'),
    ("eightroman", '\u{2177}'),
    ("eightsuperior", '\u{2078}'),
    ("eightthai", '\u{0e58}'),
    ("einvertedbreve", '\u{0207}'),
    ("eiotifiedcyrillic", '\u{0465}'),
    ("ekatakana", '\u{30a8}'),
    ("ekatakanahalfwidth", '\u{ff74}'),
    ("ekonkargurmukhi", '\u{0a74}'),
    ("ekorean", '\u{3154}'),
    ("elcyrillic", '\u{043b}'),
    ("element", '\u{2208}'),
    ("elevencircle", '\u{246a}'),
    ("elevenparen", '\u{247e}'),
    ("elevenperiod", '\u{2492}'),
    ("elevenroman", '\u{217a}'),
    ("ellipsis", '\u{2026}'),
    ("ellipsisvertical", '\u{22ee}'),
    ("emacron", '\u{0113}'),
    ("emacronacute", '\u{1e17}'),
    ("emacrongrave", '\u{1e15}'),
    ("emcyrillic", '\u{043c}'),
    ("emdash", '\u{2014}'),
    ("emdashvertical", '\u{fe31}'),
    ("emonospace", '\u{ff45}'),
    ("emphasismarkarmenian", '\u{055b}'),
    ("emptyset", '\u{2205}'),
    ("enbopomofo", '\u{3123}'),
    ("encyrillic", '\u{043d}'),
    ("endash", '\u{2013}'),
    ("endashvertical", '\u{fe32}'),
    ("endescendercyrillic", '\u{04a3}'),
    ("eng", '\u{014b}'),
    ("engbopomofo", '\u{3125}'),
    ("enghecyrillic", '\u{04a5}'),
    ("enhookcyrillic", '\u{04c8}'),
    ("enspace", '\u{2002}'),
    ("eogonek", '\u{0119}'),
    ("eokorean", '\u{3153}'),
    ("eopen", '\u{025b}'),
    ("eopenclosed", '\u{029a}'),
    ("eopenreversed", '\u{025c}'),
    ("eopenreversedclosed", '\u{025e}'),
    ("eopenreversedhook", '\u{025d}'),
    ("eparen", '\u{24a0}'),
    ("epsilon", '\u{03b5}'),
    ("epsilon1", '\u{03f5}'),
    ("epsilontonos", '\u{03ad}'),
    ("equal", '\u{003d}'),
    ("equalmonospace", '\u{ff1d}'),
    ("equalsmall", '\u{fe66}'),
    ("equalsuperior", '\u{207c}'),
    ("equivalence", '\u{2261}'),
    ("equivasymptotic", '\u{224d}'),
    ("erbopomofo", '\u{3126}'),
    ("ercyrillic", '\u{0440}'),
    ("ereversed", '\u{0258}'),
    ("ereversedcyrillic", '\u{044d}'),
    ("escyrillic", '\u{0441}'),
    ("esdescendercyrillic", '\u{04ab}'),
    ("esh", '\u{0283}'),
    ("eshcurl", '\u{0286}'),
    ("eshortdeva", '\u{090e}'),
    ("eshortvowelsigndeva", '\u{0946}'),
    ("eshreversedloop", '\u{01aa}'),
    ("eshsquatreversed", '\u{0285}'),
    ("esmallhiragana", '\u{3047}'),
    ("esmallkatakana", '\u{30a7}'),
    ("esmallkatakanahalfwidth", '\u{ff6a}'),
    ("estimated", '\u{212e}'),
    ("esuperior", '\u{f6ec}'),
    ("eta", '\u{03b7}'),
    ("etarmenian", '\u{0568}'),
    ("etatonos", '\u{03ae}'),
    ("eth", '\u{00f0}'),
    ("etilde", '\u{1ebd}'),
    ("etildebelow", '\u{1e1b}'),
    ("etnahtafoukhhebrew", '\u{0591}'),
    ("etnahtafoukhlefthebrew", '\u{0591}'),
    ("etnahtahebrew", '\u{0591}'),
    ("etnahtalefthebrew", '\u{0591}'),
    ("eturned", '\u{01dd}'),
    ("eukorean", '\u{3161}'),
    ("euro", '\u{20ac}'),
    ("evowelsignbengali", '\u{09c7}'),
    ("evowelsigndeva", '\u{0947}'),
    ("evowelsigngujarati", '\u{0ac7}'),
    ("exclam", '\u{0021}'),
    ("exclamarmenian", '\u{055c}'),
    ("exclamdbl", '\u{203c}'),
    ("exclamdown", '\u{00a1}'),
    ("exclamdownsmall", '\u{f7a1}'),
    ("exclammonospace", '\u{ff01}'),
    ("exclamsmall", '\u{f721}'),
    ("existential", '\u{2203}'),
    ("ezh", '\u{0292}'),
    ("ezhcaron", '\u{01ef}'),
    ("ezhcurl", '\u{0293}'),
    ("ezhreversed", '\u{01b9}'),
    ("ezhtail", '\u{01ba}'),
    ("f", '\u{0066}'),
    ("f_f", '\u{fb00}'),
    ("f_f_i", '\u{fb03}'),
    ("f_f_l", '\u{fb04}'),
    ("f_i", '\u{fb01}'),
    ("f_l", '\u{fb02}'),
    ("fadeva", '\u{095e}'),
    ("fagurmukhi", '\u{0a5e}'),
    ("fahrenheit", '\u{2109}'),
    ("fathaarabic", '\u{064e}'),
    ("fathalowarabic", '\u{064e}'),
    ("fathatanarabic", '\u{064b}'),
    ("fbopomofo", '\u{3108}'),
    ("fcircle", '\u{24d5}'),
    ("fdotaccent", '\u{1e1f}'),
    ("feharabic", '\u{0641}'),
    ("feharmenian", '\u{0586}'),
    ("fehfinalarabic", '\u{fed2}'),
    ("fehinitialarabic", '\u{fed3}'),
    ("fehmedialarabic", '\u{fed4}'),
    ("feicoptic", '\u{03e5}'),
    ("female", '\u{2640}'),
    ("ff", '\u{fb00}'),
    ("ffi", '\u{fb03}'),
    ("ffl", '\u{fb04}'),
    ("fi", '\u{fb01}'),
    ("fifteencircle", '\u{246e}'),
    ("fifteenparen", '\u{2482}'),
    ("fifteenperiod", '\u{2496}'),
    ("figuredash", '\u{2012}'),
    ("filledbox", '\u{25a0}'),
    ("filledrect", '\u{25ac}'),
    ("finalkaf", '\u{05da}'),
    ("finalkafdagesh", '\u{fb3a}'),
    ("finalkafdageshhebrew", '\u{fb3a}'),
    ("finalkafhebrew", '\u{05da}'),
    ("finalkafqamats", '\u{05da}'),
    ("finalkafqamatshebrew", '\u{05da}'),
    ("finalkafsheva", '\u{05da}'),
    ("finalkafshevahebrew", '\u{05da}'),
    ("finalmem", '\u{05dd}'),
    ("finalmemhebrew", '\u{05dd}'),
    ("finalnun", '\u{05df}'),
    ("finalnunhebrew", '\u{05df}'),
    ("finalpe", '\u{05e3}'),
    ("finalpehebrew", '\u{05e3}'),
    ("finaltsadi", '\u{05e5}'),
    ("finaltsadihebrew", '\u{05e5}'),
    ("firsttonechinese", '\u{02c9}'),
    ("fisheye", '\u{25c9}'),
    ("fitacyrillic", '\u{0473}'),
    ("five", '\u{0035}'),
    ("fivearabic", '\u{0665}'),
    ("fivebengali", '\u{09eb}'),
    ("fivecircle", '\u{2464}'),
    ("fivecircleinversesansserif", '\u{278e}'),
    ("fivedeva", '\u{096b}'),
    ("fiveeighths", '\u{215d}'),
    ("fivegujarati", '\u{0aeb}'),
    ("fivegurmukhi", '\u{0a6b}'),
    ("fivehackarabic", '\u{0665}'),
    ("fivehangzhou", '\u{3025}'),
    ("fiveideographicparen", '\u{3224}'),
    ("fiveinferior", '\u{2085}'),
    ("fivemonospace", '\u{ff15}'),
    ("fiveoldstyle", '\u{f735}'),
    ("fiveparen", '\u{2478}'),
    ("fiveperiod", '\u{248c}'),
    ("fivepersian", '\u{06f5}'),
    ("fiveroman", '\u{2174}'),
    ("fivesuperior", '\u{2075}'),
    ("fivethai", '\u{0e55}'),
    ("fl", '\u{fb02}'),
    ("flat", '\u{266d}'),
    ("floorleft", '\u{230a}'),
    ("floorleftBig", '\u{230a}'),
    ("floorleftBigg", '\u{230a}'),
    ("floorleftbig", '\u{230a}'),
    ("floorleftbigg", '\u{230a}'),
    ("floorright", '\u{230b}'),
    ("floorrightBig", '\u{230b}'),
    ("floorrightBigg", '\u{230b}'),
    ("floorrightbig", '\u{230b}'),
    ("floorrightbigg", '\u{230b}'),
    ("florin", '\u{0192}'),
    ("fmonospace", '\u{ff46}'),
    ("fmsquare", '\u{3399}'),
    ("fofanthai", '\u{0e1f}'),
    ("fofathai", '\u{0e1d}'),
    ("follows", '\u{227b}'),
    ("followsequal", '\u{227d}'),
    ("fongmanthai", '\u{0e4f}'),
    ("forall", '\u{2200}'),
    ("four", '\u{0034}'),
    ("fourarabic", '\u{0664}'),
    ("fourbengali", '\u{09ea}'),
    ("fourcircle", '\u{2463}'),
    ("fourcircleinversesansserif", '\u{278d}'),
    ("fourdeva", '\u{096a}'),
    ("fourgujarati", '\u{0aea}'),
    ("fourgurmukhi", '\u{0a6a}'),
    ("fourhackarabic", '\u{0664}'),
    ("fourhangzhou", '\u{3024}'),
    ("fourideographicparen", '\u{3223}'),
    ("fourinferior", '\u{2084}'),
    ("fourmonospace", '\u{ff14}'),
    ("fournumeratorbengali", '\u{09f7}'),
    ("fouroldstyle", '\u{f734}'),
    ("fourparen", '\u{2477}'),
    ("fourperiod", '\u{248b}'),
    ("fourpersian", '\u{06f4}'),
    ("fourroman", '\u{2173}'),
    ("foursuperior", '\u{2074}'),
    ("fourteencircle", '\u{246d}'),
    ("fourteenparen", '\u{2481}'),
    ("fourteenperiod", '\u{2495}'),
    ("fourthai", '\u{0e54}'),
    ("fourthtonechinese", '\u{02cb}'),
    ("fparen", '\u{24a1}'),
    ("fraction", '\u{2044}'),
    ("franc", '\u{20a3}'),
    ("g", '\u{0067}'),
    ("gabengali", '\u{0997}'),
    ("gacute", '\u{01f5}'),
    ("gadeva", '\u{0917}'),
    ("gafarabic", '\u{06af}'),
    ("gaffinalarabic", '\u{fb93}'),
    ("gafinitialarabic", '\u{fb94}'),
    ("gafmedialarabic", '\u{fb95}'),
    ("gagujarati", '\u{0a97}'),
    ("gagurmukhi", '\u{0a17}'),
    ("gahiragana", '\u{304c}'),
    ("gakatakana", '\u{30ac}'),
    ("gamma", '\u{03b3}'),
    ("gammalatinsmall", '\u{0263}'),
    ("gammasuperior", '\u{02e0}'),
    ("gangiacoptic", '\u{03eb}'),
    ("gbopomofo", '\u{310d}'),
    ("gbreve", '\u{011f}'),
    ("gcaron", '\u{01e7}'),
    ("gcedilla", '\u{0123}'),
    ("gcircle", '\u{24d6}'),
    ("gcircumflex", '\u{011d}'),
    ("gcommaaccent", '\u{0123}'),
    ("gdot", '\u{0121}'),
    ("gdotaccent", '\u{0121}'),
    ("gecyrillic", '\u{0433}'),
    ("gehiragana", '\u{3052}'),
    ("gekatakana", '\u{30b2}'),
    ("geometricallyequal", '\u{2251}'),
    ("gereshaccenthebrew", '\u{059c}'),
    ("gereshhebrew", '\u{05f3}'),
    ("gereshmuqdamhebrew", '\u{059d}'),
    ("germandbls", '\u{00df}'),
    ("gershayimaccenthebrew", '\u{059e}'),
    ("gershayimhebrew", '\u{05f4}'),
    ("getamark", '\u{3013}'),
    ("ghabengali", '\u{0998}'),
    ("ghadarmenian", '\u{0572}'),
    ("ghadeva", '\u{0918}'),
    ("ghagujarati", '\u{0a98}'),
    ("ghagurmukhi", '\u{0a18}'),
    ("ghainarabic", '\u{063a}'),
    ("ghainfinalarabic", '\u{fece}'),
    ("ghaininitialarabic", '\u{fecf}'),
    ("ghainmedialarabic", '\u{fed0}'),
    ("ghemiddlehookcyrillic", '\u{0495}'),
    ("ghestrokecyrillic", '\u{0493}'),
    ("gheupturncyrillic", '\u{0491}'),
    ("ghhadeva", '\u{095a}'),
    ("ghhagurmukhi", '\u{0a5a}'),
    ("ghook", '\u{0260}'),
    ("ghzsquare", '\u{3393}'),
    ("gihiragana", '\u{304e}'),
    ("gikatakana", '\u{30ae}'),
    ("gimarmenian", '\u{0563}'),
    ("gimel", '\u{05d2}'),
    ("gimeldagesh", '\u{fb32}'),
    ("gimeldageshhebrew", '\u{fb32}'),
    ("gimelhebrew", '\u{05d2}'),
    ("gjecyrillic", '\u{0453}'),
    ("glottalinvertedstroke", '\u{01be}'),
    ("glottalstop", '\u{0294}'),
    ("glottalstopinverted", '\u{0296}'),
    ("glottalstopmod", '\u{02c0}'),
    ("glottalstopreversed", '\u{0295}'),
    ("glottalstopreversedmod", '\u{02c1}'),
    ("glottalstopreversedsuperior", '\u{02e4}'),
    ("glottalstopstroke", '\u{02a1}'),
    ("glottalstopstrokereversed", '\u{02a2}'),
    ("gmacron", '\u{1e21}'),
    ("gmonospace", '\u{ff47}'),
    ("gohiragana", '\u{3054}'),
    ("gokatakana", '\u{30b4}'),
    ("gparen", '\u{24a2}'),
    ("gpasquare", '\u{33ac}'),
    ("gradient", '\u{2207}'),
    ("grave", '\u{0060}'),
    ("gravebelowcmb", '\u{0316}'),
    ("gravecmb", '\u{0300}'),
    ("gravecomb", '\u{0300}'),
    ("gravedeva", '\u{0953}'),
    ("gravelowmod", '\u{02ce}'),
    ("gravemonospace", '\u{ff40}'),
    ("gravetonecmb", '\u{0340}'),
    ("greater", '\u{003e}'),
    ("greaterequal", '\u{2265}'),
    ("greaterequalorless", '\u{22db}'),
    ("greatermonospace", '\u{ff1e}'),
    ("greatermuch", '\u{226b}'),
    ("greaterorequivalent", '\u{2273}'),
    ("greaterorless", '\u{2277}'),
    ("greateroverequal", '\u{2267}'),
    ("greatersmall", '\u{fe65}'),
    ("gscript", '\u{0261}'),
    ("gstroke", '\u{01e5}'),
    ("guhiragana", '\u{3050}'),
    ("guillemotleft", '\u{00ab}'),
    ("guillemotright", '\u{00bb}'),
    ("guilsinglleft", '\u{2039}'),
    ("guilsinglright", '\u{203a}'),
    ("gukatakana", '\u{30b0}'),
    ("guramusquare", '\u{3318}'),
    ("gysquare", '\u{33c9}'),
    ("h", '\u{0068}'),
    ("haabkhasiancyrillic", '\u{04a9}'),
    ("haaltonearabic", '\u{06c1}'),
    ("habengali", '\u{09b9}'),
    ("hadescendercyrillic", '\u{04b3}'),
    ("hadeva", '\u{0939}'),
    ("hagujarati", '\u{0ab9}'),
    ("hagurmukhi", '\u{0a39}'),
    ("haharabic", '\u{062d}'),
    ("hahfinalarabic", '\u{fea2}'),
    ("hahinitialarabic", '\u{fea3}'),
    ("hahiragana", '\u{306f}'),
    ("hahmedialarabic", '\u{fea4}'),
    ("haitusquare", '\u{332a}'),
    ("hakatakana", '\u{30cf}'),
    ("hakatakanahalfwidth", '\u{ff8a}'),
    ("halantgurmukhi", '\u{0a4d}'),
    ("hamzaarabic", '\u{0621}'),
    ("hamzadammaarabic", '\u{0621}'),
    ("hamzadammatanarabic", '\u{0621}'),
    ("hamzafathaarabic", '\u{0621}'),
    ("hamzafathatanarabic", '\u{0621}'),
    ("hamzalowarabic", '\u{0621}'),
    ("hamzalowkasraarabic", '\u{0621}'),
    ("hamzalowkasratanarabic", '\u{0621}'),
    ("hamzasukunarabic", '\u{0621}'),
    ("hangulfiller", '\u{3164}'),
    ("hardsigncyrillic", '\u{044a}'),
    ("harpoonleftbarbup", '\u{21bc}'),
    ("harpoonleftdown", '\u{21bd}'),
    ("harpoonleftup", '\u{21bc}'),
    ("harpoonrightbarbup", '\u{21c0}'),
    ("harpoonrightdown", '\u{21c1}'),
    ("harpoonrightup", '\u{21c0}'),
    ("hasquare", '\u{33ca}'),
    ("hatafpatah", '\u{05b2}'),
    ("hatafpatah16", '\u{05b2}'),
    ("hatafpatah23", '\u{05b2}'),
    ("hatafpatah2f", '\u{05b2}'),
    ("hatafpatahhebrew", '\u{05b2}'),
    ("hatafpatahnarrowhebrew", '\u{05b2}'),
    ("hatafpatahquarterhebrew", '\u{05b2}'),
    ("hatafpatahwidehebrew", '\u{05b2}'),
    ("hatafqamats", '\u{05b3}'),
    ("hatafqamats1b", '\u{05b3}'),
    ("hatafqamats28", '\u{05b3}'),
    ("hatafqamats34", '\u{05b3}'),
    ("hatafqamatshebrew", '\u{05b3}'),
    ("hatafqamatsnarrowhebrew", '\u{05b3}'),
    ("hatafqamatsquarterhebrew", '\u{05b3}'),
    ("hatafqamatswidehebrew", '\u{05b3}'),
    ("hatafsegol", '\u{05b1}'),
    ("hatafsegol17", '\u{05b1}'),
    ("hatafsegol24", '\u{05b1}'),
    ("hatafsegol30", '\u{05b1}'),
    ("hatafsegolhebrew", '\u{05b1}'),
    ("hatafsegolnarrowhebrew", '\u{05b1}'),
    ("hatafsegolquarterhebrew", '\u{05b1}'),
    ("hatafsegolwidehebrew", '\u{05b1}'),
    ("hatwide", '\u{0302}'),
    ("hatwider", '\u{0302}'),
    ("hatwiderr", '\u{0302}'),
    ("hbar", '\u{0127}'),
    ("hbopomofo", '\u{310f}'),
    ("hbrevebelow", '\u{1e2b}'),
    ("hcedilla", '\u{1e29}'),
    ("hcircle", '\u{24d7}'),
    ("hcircumflex", '\u{0125}'),
    ("hdieresis", '\u{1e27}'),
    ("hdotaccent", '\u{1e23}'),
    ("hdotbelow", '\u{1e25}'),
    ("he", '\u{05d4}'),
    ("heart", '\u{2661}'),
    ("heart2", '\u{2665}'),
    ("heartsuitblack", '\u{2665}'),
    ("heartsuitwhite", '\u{2661}'),
    ("hedagesh", '\u{fb34}'),
    ("hedageshhebrew", '\u{fb34}'),
    ("hehaltonearabic", '\u{06c1}'),
    ("heharabic", '\u{0647}'),
    ("hehebrew", '\u{05d4}'),
    ("hehfinalaltonearabic", '\u{fba7}'),
    ("hehfinalalttwoarabic", '\u{feea}'),
    ("hehfinalarabic", '\u{feea}'),
    ("hehhamzaabovefinalarabic", '\u{fba5}'),
    ("hehhamzaaboveisolatedarabic", '\u{fba4}'),
    ("hehinitialaltonearabic", '\u{fba8}'),
    ("hehinitialarabic", '\u{feeb}'),
    ("hehiragana", '\u{3078}'),
    ("hehmedialaltonearabic", '\u{fba9}'),
    ("hehmedialarabic", '\u{feec}'),
    ("heiseierasquare", '\u{337b}'),
    ("hekatakana", '\u{30d8}'),
    ("hekatakanahalfwidth", '\u{ff8d}'),
    ("hekutaarusquare", '\u{3336}'),
    ("henghook", '\u{0267}'),
    ("herutusquare", '\u{3339}'),
    ("het", '\u{05d7}'),
    ("hethebrew", '\u{05d7}'),
    ("hhook", '\u{0266}'),
    ("hhooksuperior", '\u{02b1}'),
    ("hieuhacirclekorean", '\u{327b}'),
    ("hieuhaparenkorean", '\u{321b}'),
    ("hieuhcirclekorean", '\u{326d}'),
    ("hieuhkorean", '\u{314e}'),
    ("hieuhparenkorean", '\u{320d}'),
    ("hihiragana", '\u{3072}'),
    ("hikatakana", '\u{30d2}'),
    ("hikatakanahalfwidth", '\u{ff8b}'),
    ("hiriq", '\u{05b4}'),
    ("hiriq14", '\u{05b4}'),
    ("hiriq21", '\u{05b4}'),
    ("hiriq2d", '\u{05b4}'),
    ("hiriqhebrew", '\u{05b4}'),
    ("hiriqnarrowhebrew", '\u{05b4}'),
    ("hiriqquarterhebrew", '\u{05b4}'),
    ("hiriqwidehebrew", '\u{05b4}'),
    ("hlinebelow", '\u{1e96}'),
    ("hmonospace", '\u{ff48}'),
    ("hoarmenian", '\u{0570}'),
    ("hohipthai", '\u{0e2b}'),
    ("hohiragana", '\u{307b}'),
    ("hokatakana", '\u{30db}'),
    ("hokatakanahalfwidth", '\u{ff8e}'),
    ("holam", '\u{05b9}'),
    ("holam19", '\u{05b9}'),
    ("holam26", '\u{05b9}'),
    ("holam32", '\u{05b9}'),
    ("holamhebrew", '\u{05b9}'),
    ("holamnarrowhebrew", '\u{05b9}'),
    ("holamquarterhebrew", '\u{05b9}'),
    ("holamwidehebrew", '\u{05b9}'),
    ("honokhukthai", '\u{0e2e}'),
    ("hookabovecomb", '\u{0309}'),
    ("hookcmb", '\u{0309}'),
    ("hookleftchar", '\u{21a9}'),
    ("hookpalatalizedbelowcmb", '\u{0321}'),
    ("hookretroflexbelowcmb", '\u{0322}'),
    ("hookrightchar", '\u{21aa}'),
    ("hoonsquare", '\u{3342}'),
    ("horicoptic", '\u{03e9}'),
    ("horizontalbar", '\u{2015}'),
    ("horncmb", '\u{031b}'),
    ("hotsprings", '\u{2668}'),
    ("house", '\u{2302}'),
    ("hparen", '\u{24a3}'),
    ("hsuperior", '\u{02b0}'),
    ("hturned", '\u{0265}'),
    ("huhiragana", '\u{3075}'),
    ("huiitosquare", '\u{3333}'),
    ("hukatakana", '\u{30d5}'),
    ("hukatakanahalfwidth", '\u{ff8c}'),
    ("hungarumlaut", '\u{02dd}'),
    ("hungarumlautcmb", '\u{030b}'),
    ("hv", '\u{0195}'),
    ("hyphen", '\u{002d}'),
    ("hyphen_alt", '\u{2010}'),
    ("hyphenchar", '\u{002d}'),
    ("hypheninferior", '\u{f6e5}'),
    ("hyphenmonospace", '\u{ff0d}'),
    ("hyphensmall", '\u{fe63}'),
    ("hyphensuperior", '\u{f6e6}'),
    ("hyphentwo", '\u{2010}'),
    ("i", '\u{0069}'),
    ("iacute", '\u{00ed}'),
    ("iacyrillic", '\u{044f}'),
    ("ibengali", '\u{0987}'),
    ("ibopomofo", '\u{3127}'),
    ("ibreve", '\u{012d}'),
    ("icaron", '\u{01d0}'),
    ("icircle", '\u{24d8}'),
    ("icircumflex", '\u{00ee}'),
    ("icyrillic", '\u{0456}'),
    ("idblgrave", '\u{0209}'),
    ("ideographearthcircle", '\u{328f}'),
    ("ideographfirecircle", '\u{328b}'),
    ("ideographicallianceparen", '\u{323f}'),
    ("ideographiccallparen", '\u{323a}'),
    ("ideographiccentrecircle", '\u{32a5}'),
    ("ideographicclose", '\u{3006}'),
    ("ideographiccomma", '\u{3001}'),
    ("ideographiccommaleft", '\u{ff64}'),
    ("ideographiccongratulationparen", '\u{3237}'),
    ("ideographiccorrectcircle", '\u{32a3}'),
    ("ideographicearthparen", '\u{322f}'),
    ("ideographicenterpriseparen", '\u{323d}'),
    ("ideographicexcellentcircle", '\u{329d}'),
    ("ideographicfestivalparen", '\u{3240}'),
    ("ideographicfinancialcircle", '\u{3296}'),
    ("ideographicfinancialparen", '\u{3236}'),
    ("ideographicfireparen", '\u{322b}'),
    ("ideographichaveparen", '\u{3232}'),
    ("ideographichighcircle", '\u{32a4}'),
    ("ideographiciterationmark", '\u{3005}'),
    ("ideographiclaborcircle", '\u{3298}'),
    ("ideographiclaborparen", '\u{3238}'),
    ("ideographicleftcircle", '\u{32a7}'),
    ("ideographiclowcircle", '\u{32a6}'),
    ("ideographicmedicinecircle", '\u{32a9}'),
    ("ideographicmetalparen", '\u{322e}'),
    ("ideographicmoonparen", '\u{322a}'),
    ("ideographicnameparen", '\u{3234}'),
    ("ideographicperiod", '\u{3002}'),
    ("ideographicprintcircle", '\u{329e}'),
    ("ideographicreachparen", '\u{3243}'),
    ("ideographicrepresentparen", '\u{3239}'),
    ("ideographicresourceparen", '\u{323e}'),
    ("ideographicrightcircle", '\u{32a8}'),
    ("ideographicsecretcircle", '\u{3299}'),
    ("ideographicselfparen", '\u{3242}'),
    ("ideographicsocietyparen", '\u{3233}'),
    ("ideographicspace", '\u{3000}'),
    ("ideographicspecialparen", '\u{3235}'),
    ("ideographicstockparen", '\u{3231}'),
    ("ideographicstudyparen", '\u{323b}'),
    ("ideographicsunparen", '\u{3230}'),
    ("ideographicsuperviseparen", '\u{323c}'),
    ("ideographicwaterparen", '\u{322c}'),
    ("ideographicwoodparen", '\u{322d}'),
    ("ideographiczero", '\u{3007}'),
    ("ideographmetalcircle", '\u{328e}'),
    ("ideographmooncircle", '\u{328a}'),
    ("ideographnamecircle", '\u{3294}'),
    ("ideographsuncircle", '\u{3290}'),
    ("ideographwatercircle", '\u{328c}'),
    ("ideographwoodcircle", '\u{328d}'),
    ("ideva", '\u{0907}'),
    ("idieresis", '\u{00ef}'),
    ("idieresisacute", '\u{1e2f}'),
    ("idieresiscyrillic", '\u{04e5}'),
    ("idotbelow", '\u{1ecb}'),
    ("iebrevecyrillic", '\u{04d7}'),
    ("iecyrillic", '\u{0435}'),
    ("ieungacirclekorean", '\u{3275}'),
    ("ieungaparenkorean", '\u{3215}'),
    ("ieungcirclekorean", '\u{3267}'),
    ("ieungkorean", '\u{3147}'),
    ("ieungparenkorean", '\u{3207}'),
    ("igrave", '\u{00ec}'),
    ("igujarati", '\u{0a87}'),
    ("igurmukhi", '\u{0a07}'),
    ("ihiragana", '\u{3044}'),
    ("ihookabove", '\u{1ec9}'),
    ("iibengali", '\u{0988}'),
    ("iicyrillic", '\u{0438}'),
    ("iideva", '\u{0908}'),
    ("iigujarati", '\u{0a88}'),
    ("iigurmukhi", '\u{0a08}'),
    ("iimatragurmukhi", '\u{0a40}'),
    ("iinvertedbreve", '\u{020b}'),
    ("iishortcyrillic", '\u{0439}'),
    ("iivowelsignbengali", '\u{09c0}'),
    ("iivowelsigndeva", '\u{0940}'),
    ("iivowelsigngujarati", '\u{0ac0}'),
    ("ij", '\u{0133}'),
    ("ikatakana", '\u{30a4}'),
    ("ikatakanahalfwidth", '\u{ff72}'),
    ("ikorean", '\u{3163}'),
    ("ilde", '\u{02dc}'),
    ("iluyhebrew", '\u{05ac}'),
    ("imacron", '\u{012b}'),
    ("imacroncyrillic", '\u{04e3}'),
    ("imageorapproximatelyequal", '\u{2253}'),
    ("imatragurmukhi", '\u{0a3f}'),
    ("imonospace", '\u{ff49}'),
    ("increment", '\u{2206}'),
    ("infinity", '\u{221e}'),
    ("iniarmenian", '\u{056b}'),
    ("integral", '\u{222b}'),
    ("integralbottom", '\u{2321}'),
    ("integralbt", '\u{2321}'),
    ("integraldisplay", '\u{222b}'),
    ("integralex", '\u{f8f5}'),
    ("integraltext", '\u{222b}'),
    ("integraltop", '\u{2320}'),
    ("integraltp", '\u{2320}'),
    ("interrobang", '\u{203d}'),
    ("intersection", '\u{2229}'),
    ("intersectiondisplay", '\u{22c2}'),
    ("intersectionsq", '\u{2293}'),
    ("intersectiontext", '\u{22c2}'),
    ("intisquare", '\u{3305}'),
    ("invbullet", '\u{25d8}'),
    ("invcircle", '\u{25d9}'),
    ("invsmileface", '\u{263b}'),
    ("iocyrillic", '\u{0451}'),
    ("iogonek", '\u{012f}'),
    ("iota", '\u{03b9}'),
    ("iotadieresis", '\u{03ca}'),
    ("iotadieresistonos", '\u{0390}'),
    ("iotalatin", '\u{0269}'),
    ("iotatonos", '\u{03af}'),
    ("iparen", '\u{24a4}'),
    ("irigurmukhi", '\u{0a72}'),
    ("ismallhiragana", '\u{3043}'),
    ("ismallkatakana", '\u{30a3}'),
    ("ismallkatakanahalfwidth", '\u{ff68}'),
    ("issharbengali", '\u{09fa}'),
    ("istroke", '\u{0268}'),
    ("isuperior", '\u{f6ed}'),
    ("iterationhiragana", '\u{309d}'),
    ("iterationkatakana", '\u{30fd}'),
    ("itilde", '\u{0129}'),
    ("itildebelow", '\u{1e2d}'),
    ("iubopomofo", '\u{3129}'),
    ("iucyrillic", '\u{044e}'),
    ("ivowelsignbengali", '\u{09bf}'),
    ("ivowelsigndeva", '\u{093f}'),
    ("ivowelsigngujarati", '\u{0abf}'),
    ("izhitsacyrillic", '\u{0475}'),
    ("izhitsadblgravecyrillic", '\u{0477}'),
    ("j", '\u{006a}'),
    ("jaarmenian", '\u{0571}'),
    ("jabengali", '\u{099c}'),
    ("jadeva", '\u{091c}'),
    ("jagujarati", '\u{0a9c}'),
    ("jagurmukhi", '\u{0a1c}'),
    ("jbopomofo", '\u{3110}'),
    ("jcaron", '\u{01f0}'),
    ("jcircle", '\u{24d9}'),
    ("jcircumflex", '\u{0135}'),
    ("jcrossedtail", '\u{029d}'),
    ("jdotlessstroke", '\u{025f}'),
    ("jecyrillic", '\u{0458}'),
    ("jeemarabic", '\u{062c}'),
    ("jeemfinalarabic", '\u{fe9e}'),
    ("jeeminitialarabic", '\u{fe9f}'),
    ("jeemmedialarabic", '\u{fea0}'),
    ("jeharabic", '\u{0698}'),
    ("jehfinalarabic", '\u{fb8b}'),
    ("jhabengali", '\u{099d}'),
    ("jhadeva", '\u{091d}'),
    ("jhagujarati", '\u{0a9d}'),
    ("jhagurmukhi", '\u{0a1d}'),
    ("jheharmenian", '\u{057b}'),
    ("jis", '\u{3004}'),
    ("jmonospace", '\u{ff4a}'),
    ("jparen", '\u{24a5}'),
    ("jsuperior", '\u{02b2}'),
    ("k", '\u{006b}'),
    ("kabashkircyrillic", '\u{04a1}'),
    ("kabengali", '\u{0995}'),
    ("kacute", '\u{1e31}'),
    ("kacyrillic", '\u{043a}'),
    ("kadescendercyrillic", '\u{049b}'),
    ("kadeva", '\u{0915}'),
    ("kaf", '\u{05db}'),
    ("kafarabic", '\u{0643}'),
    ("kafdagesh", '\u{fb3b}'),
    ("kafdageshhebrew", '\u{fb3b}'),
    ("kaffinalarabic", '\u{feda}'),
    ("kafhebrew", '\u{05db}'),
    ("kafinitialarabic", '\u{fedb}'),
    ("kafmedialarabic", '\u{fedc}'),
    ("kafrafehebrew", '\u{fb4d}'),
    ("kagujarati", '\u{0a95}'),
    ("kagurmukhi", '\u{0a15}'),
    ("kahiragana", '\u{304b}'),
    ("kahookcyrillic", '\u{04c4}'),
    ("kakatakana", '\u{30ab}'),
    ("kakatakanahalfwidth", '\u{ff76}'),
    ("kappa", '\u{03ba}'),
    ("kappasymbolgreek", '\u{03f0}'),
    ("kapyeounmieumkorean", '\u{3171}'),
    ("kapyeounphieuphkorean", '\u{3184}'),
    ("kapyeounpieupkorean", '\u{3178}'),
    ("kapyeounssangpieupkorean", '\u{3179}'),
    ("karoriisquare", '\u{330d}'),
    ("kashidaautoarabic", '\u{0640}'),
    ("kashidaautonosidebearingarabic", '\u{0640}'),
    ("kasmallkatakana", '\u{30f5}'),
    ("kasquare", '\u{3384}'),
    ("kasraarabic", '\u{0650}'),
    ("kasratanarabic", '\u{064d}'),
    ("kastrokecyrillic", '\u{049f}'),
    ("katahiraprolongmarkhalfwidth", '\u{ff70}'),
    ("kaverticalstrokecyrillic", '\u{049d}'),
    ("kbopomofo", '\u{310e}'),
    ("kcalsquare", '\u{3389}'),
    ("kcaron", '\u{01e9}'),
    ("kcedilla", '\u{0137}'),
    ("kcircle", '\u{24da}'),
    ("kcommaaccent", '\u{0137}'),
    ("kdotbelow", '\u{1e33}'),
    ("keharmenian", '\u{0584}'),
    ("kehiragana", '\u{3051}'),
    ("kekatakana", '\u{30b1}'),
    ("kekatakanahalfwidth", '\u{ff79}'),
    ("kenarmenian", '\u{056f}'),
    ("kesmallkatakana", '\u{30f6}'),
    ("kgreenlandic", '\u{0138}'),
    ("khabengali", '\u{0996}'),
    ("khacyrillic", '\u{0445}'),
    ("khadeva", '\u{0916}'),
    ("khagujarati", '\u{0a96}'),
    ("khagurmukhi", '\u{0a16}'),
    ("khaharabic", '\u{062e}'),
    ("khahfinalarabic", '\u{fea6}'),
    ("khahinitialarabic", '\u{fea7}'),
    ("khahmedialarabic", '\u{fea8}'),
    ("kheicoptic", '\u{03e7}'),
    ("khhadeva", '\u{0959}'),
    ("khhagurmukhi", '\u{0a59}'),
    ("khieukhacirclekorean", '\u{3278}'),
    ("khieukhaparenkorean", '\u{3218}'),
    ("khieukhcirclekorean", '\u{326a}'),
    ("khieukhkorean", '\u{314b}'),
    ("khieukhparenkorean", '\u{320a}'),
    ("khokhaithai", '\u{0e02}'),
    ("khokhonthai", '\u{0e05}'),
    ("khokhuatthai", '\u{0e03}'),
    ("khokhwaithai", '\u{0e04}'),
    ("khomutthai", '\u{0e5b}'),
    ("khook", '\u{0199}'),
    ("khorakhangthai", '\u{0e06}'),
    ("khzsquare", '\u{3391}'),
    ("kihiragana", '\u{304d}'),
    ("kikatakana", '\u{30ad}'),
    ("kikatakanahalfwidth", '\u{ff77}'),
    ("kiroguramusquare", '\u{3315}'),
    ("kiromeetorusquare", '\u{3316}'),
    ("kirosquare", '\u{3314}'),
    ("kiyeokacirclekorean", '\u{326e}'),
    ("kiyeokaparenkorean", '\u{320e}'),
    ("kiyeokcirclekorean", '\u{3260}'),
    ("kiyeokkorean", '\u{3131}'),
    ("kiyeokparenkorean", '\u{3200}'),
    ("kiyeoksioskorean", '\u{3133}'),
    ("kjecyrillic", '\u{045c}'),
    ("klinebelow", '\u{1e35}'),
    ("klsquare", '\u{3398}'),
    ("kmcubedsquare", '\u{33a6}'),
    ("kmonospace", '\u{ff4b}'),
    ("kmsquaredsquare", '\u{33a2}'),
    ("kohiragana", '\u{3053}'),
    ("kohmsquare", '\u{33c0}'),
    ("kokaithai", '\u{0e01}'),
    ("kokatakana", '\u{30b3}'),
    ("kokatakanahalfwidth", '\u{ff7a}'),
    ("kooposquare", '\u{331e}'),
    ("koppacyrillic", '\u{0481}'),
    ("koreanstandardsymbol", '\u{327f}'),
    ("koroniscmb", '\u{0343}'),
    ("kparen", '\u{24a6}'),
    ("kpasquare", '\u{33aa}'),
    ("ksicyrillic", '\u{046f}'),
    ("ktsquare", '\u{33cf}'),
    ("kturned", '\u{029e}'),
    ("kuhiragana", '\u{304f}'),
    ("kukatakana", '\u{30af}'),
    ("kukatakanahalfwidth", '\u{ff78}'),
    ("kvsquare", '\u{33b8}'),
    ("kwsquare", '\u{33be}'),
    ("l", '\u{006c}'),
    ("labengali", '\u{09b2}'),
    ("lacute", '\u{013a}'),
    ("ladeva", '\u{0932}'),
    ("lagujarati", '\u{0ab2}'),
    ("lagurmukhi", '\u{0a32}'),
    ("lakkhangyaothai", '\u{0e45}'),
    ("lamaleffinalarabic", '\u{fefc}'),
    ("lamalefhamzaabovefinalarabic", '\u{fef8}'),
    ("lamalefhamzaaboveisolatedarabic", '\u{fef7}'),
    ("lamalefhamzabelowfinalarabic", '\u{fefa}'),
    ("lamalefhamzabelowisolatedarabic", '\u{fef9}'),
    ("lamalefisolatedarabic", '\u{fefb}'),
    ("lamalefmaddaabovefinalarabic", '\u{fef6}'),
    ("lamalefmaddaaboveisolatedarabic", '\u{fef5}'),
    ("lamarabic", '\u{0644}'),
    ("lambda", '\u{03bb}'),
    ("lambdastroke", '\u{019b}'),
    ("lamed", '\u{05dc}'),
    ("lameddagesh", '\u{fb3c}'),
    ("lameddageshhebrew", '\u{fb3c}'),
    ("lamedhebrew", '\u{05dc}'),
    ("lamedholam", '\u{05dc}'),
    ("lamedholamdagesh", '\u{05dc}'),
    ("lamedholamdageshhebrew", '\u{05dc}'),
    ("lamedholamhebrew", '\u{05dc}'),
    ("lamfinalarabic", '\u{fede}'),
    ("lamhahinitialarabic", '\u{fcca}'),
    ("laminitialarabic", '\u{fedf}'),
    ("lamjeeminitialarabic", '\u{fcc9}'),
    ("lamkhahinitialarabic", '\u{fccb}'),
    ("lamlamhehisolatedarabic", '\u{fdf2}'),
    ("lammedialarabic", '\u{fee0}'),
    ("lammeemhahinitialarabic", '\u{fd88}'),
    ("lammeeminitialarabic", '\u{fccc}'),
    ("lammeemjeeminitialarabic", '\u{fedf}'),
    ("lammeemkhahinitialarabic", '\u{fedf}'),
    ("largecircle", '\u{25ef}'),
    ("latticetop", '\u{22a4}'),
    ("lbar", '\u{019a}'),
    ("lbelt", '\u{026c}'),
    ("lbopomofo", '\u{310c}'),
    ("lcaron", '\u{013e}'),
    ("lcedilla", '\u{013c}'),
    ("lcircle", '\u{24db}'),
    ("lcircumflexbelow", '\u{1e3d}'),
    ("lcommaaccent", '\u{013c}'),
    ("ldot", '\u{0140}'),
    ("ldotaccent", '\u{0140}'),
    ("ldotbelow", '\u{1e37}'),
    ("ldotbelowmacron", '\u{1e39}'),
    ("leftangleabovecmb", '\u{031a}'),
    ("lefttackbelowcmb", '\u{0318}'),
    ("less", '\u{003c}'),
    ("lessequal", '\u{2264}'),
    ("lessequalorgreater", '\u{22da}'),
    ("lessmonospace", '\u{ff1c}'),
    ("lessmuch", '\u{226a}'),
    ("lessorequivalent", '\u{2272}'),
    ("lessorgreater", '\u{2276}'),
    ("lessoverequal", '\u{2266}'),
    ("lesssmall", '\u{fe64}'),
    ("lezh", '\u{026e}'),
    ("lfblock", '\u{258c}'),
    ("lhookretroflex", '\u{026d}'),
    ("lira", '\u{20a4}'),
    ("liwnarmenian", '\u{056c}'),
    ("lj", '\u{01c9}'),
    ("ljecyrillic", '\u{0459}'),
    ("ll", '\u{f6c0}'),
    ("lladeva", '\u{0933}'),
    ("llagujarati", '\u{0ab3}'),
    ("llinebelow", '\u{1e3b}'),
    ("llladeva", '\u{0934}'),
    ("llvocalicbengali", '\u{09e1}'),
    ("llvocalicdeva", '\u{0961}'),
    ("llvocalicvowelsignbengali", '\u{09e3}'),
    ("llvocalicvowelsigndeva", '\u{0963}'),
    ("lmiddletilde", '\u{026b}'),
    ("lmonospace", '\u{ff4c}'),
    ("lmsquare", '\u{33d0}'),
    ("lochulathai", '\u{0e2c}'),
    ("logicaland", '\u{2227}'),
    ("logicalanddisplay", '\u{22c0}'),
    ("logicalandtext", '\u{22c0}'),
    ("logicalnot", '\u{00ac}'),
    ("logicalnotreversed", '\u{2310}'),
    ("logicalor", '\u{2228}'),
    ("logicalordisplay", '\u{22c1}'),
    ("logicalortext", '\u{22c1}'),
    ("lolingthai", '\u{0e25}'),
    ("longs", '\u{017f}'),
    ("lowlinecenterline", '\u{fe4e}'),
    ("lowlinecmb", '\u{0332}'),
    ("lowlinedashed", '\u{fe4d}'),
    ("lozenge", '\u{25ca}'),
    ("lparen", '\u{24a7}'),
    ("lscript", '\u{2113}'),
    ("lslash", '\u{0142}'),
    ("lsquare", '\u{2113}'),
    ("lsuperior", '\u{f6ee}'),
    ("ltshade", '\u{2591}'),
    ("luthai", '\u{0e26}'),
    ("lvocalicbengali", '\u{098c}'),
    ("lvocalicdeva", '\u{090c}'),
    ("lvocalicvowelsignbengali", '\u{09e2}'),
    ("lvocalicvowelsigndeva", '\u{0962}'),
    ("lxsquare", '\u{33d3}'),
    ("m", '\u{006d}'),
    ("mabengali", '\u{09ae}'),
    ("macron", '\u{00af}'),
    ("macronbelowcmb", '\u{0331}'),
    ("macroncmb", '\u{0304}'),
    ("macronlowmod", '\u{02cd}'),
    ("macronmonospace", '\u{ffe3}'),
    ("macute", '\u{1e3f}'),
    ("madeva", '\u{092e}'),
    ("magujarati", '\u{0aae}'),
    ("magurmukhi", '\u{0a2e}'),
    ("mahapakhhebrew", '\u{05a4}'),
    ("mahapakhlefthebrew", '\u{05a4}'),
    ("mahiragana", '\u{307e}'),
    ("maichattawalowleftthai", '\u{f895}'),
    ("maichattawalowrightthai", '\u{f894}'),
    ("maichattawathai", '\u{0e4b}'),
    ("maichattawaupperleftthai", '\u{f893}'),
    ("maieklowleftthai", '\u{f88c}'),
    ("maieklowrightthai", '\u{f88b}'),
    ("maiekthai", '\u{0e48}'),
    ("maiekupperleftthai", '\u{f88a}'),
    ("maihanakatleftthai", '\u{f884}'),
    ("maihanakatthai", '\u{0e31}'),
    ("maitaikhuleftthai", '\u{f889}'),
    ("maitaikhuthai", '\u{0e47}'),
    ("maitholowleftthai", '\u{f88f}'),
    ("maitholowrightthai", '\u{f88e}'),
    ("maithothai", '\u{0e49}'),
    ("maithoupperleftthai", '\u{f88d}'),
    ("maitrilowleftthai", '\u{f892}'),
    ("maitrilowrightthai", '\u{f891}'),
    ("maitrithai", '\u{0e4a}'),
    ("maitriupperleftthai", '\u{f890}'),
    ("maiyamokthai", '\u{0e46}'),
    ("makatakana", '\u{30de}'),
    ("makatakanahalfwidth", '\u{ff8f}'),
    ("male", '\u{2642}'),
    ("mansyonsquare", '\u{3347}'),
    ("maqafhebrew", '\u{05be}'),
    ("mars", '\u{2642}'),
    ("masoracirclehebrew", '\u{05af}'),
    ("masquare", '\u{3383}'),
    ("mbopomofo", '\u{3107}'),
    ("mbsquare", '\u{33d4}'),
    ("mcircle", '\u{24dc}'),
    ("mcubedsquare", '\u{33a5}'),
    ("mdotaccent", '\u{1e41}'),
    ("mdotbelow", '\u{1e43}'),
    ("meemarabic", '\u{0645}'),
    ("meemfinalarabic", '\u{fee2}'),
    ("meeminitialarabic", '\u{fee3}'),
    ("meemmedialarabic", '\u{fee4}'),
    ("meemmeeminitialarabic", '\u{fcd1}'),
    ("meemmeemisolatedarabic", '\u{fc48}'),
    ("meetorusquare", '\u{334d}'),
    ("mehiragana", '\u{3081}'),
    ("meizierasquare", '\u{337e}'),
    ("mekatakana", '\u{30e1}'),
    ("mekatakanahalfwidth", '\u{ff92}'),
    ("mem", '\u{05de}'),
    ("memdagesh", '\u{fb3e}'),
    ("memdageshhebrew", '\u{fb3e}'),
    ("memhebrew", '\u{05de}'),
    ("menarmenian", '\u{0574}'),
    ("merkhahebrew", '\u{05a5}'),
    ("merkhakefulahebrew", '\u{05a6}'),
    ("merkhakefulalefthebrew", '\u{05a6}'),
    ("merkhalefthebrew", '\u{05a5}'),
    ("mhook", '\u{0271}'),
    ("mhzsquare", '\u{3392}'),
    ("middledotkatakanahalfwidth", '\u{ff65}'),
    ("middot", '\u{00b7}'),
    ("mieumacirclekorean", '\u{3272}'),
    ("mieumaparenkorean", '\u{3212}'),
    ("mieumcirclekorean", '\u{3264}'),
    ("mieumkorean", '\u{3141}'),
    ("mieumpansioskorean", '\u{3170}'),
    ("mieumparenkorean", '\u{3204}'),
    ("mieumpieupkorean", '\u{316e}'),
    ("mieumsioskorean", '\u{316f}'),
    ("mihiragana", '\u{307f}'),
    ("mikatakana", '\u{30df}'),
    ("mikatakanahalfwidth", '\u{ff90}'),
    ("minus", '\u{2212}'),
    ("minusbelowcmb", '\u{0320}'),
    ("minuscircle", '\u{2296}'),
    ("minusmod", '\u{02d7}'),
    ("minusplus", '\u{2213}'),
    ("minute", '\u{2032}'),
    ("miribaarusquare", '\u{334a}'),
    ("mirisquare", '\u{3349}'),
    ("mlonglegturned", '\u{0270}'),
    ("mlsquare", '\u{3396}'),
    ("mmcubedsquare", '\u{33a3}'),
    ("mmonospace", '\u{ff4d}'),
    ("mmsquaredsquare", '\u{339f}'),
    ("mohiragana", '\u{3082}'),
    ("mohmsquare", '\u{33c1}'),
    ("mokatakana", '\u{30e2}'),
    ("mokatakanahalfwidth", '\u{ff93}'),
    ("molsquare", '\u{33d6}'),
    ("momathai", '\u{0e21}'),
    ("moverssquare", '\u{33a7}'),
    ("moverssquaredsquare", '\u{33a8}'),
    ("mparen", '\u{24a8}'),
    ("mpasquare", '\u{33ab}'),
    ("mssquare", '\u{33b3}'),
    ("msuperior", '\u{f6ef}'),
    ("mturned", '\u{026f}'),
    ("mu", '\u{00b5}'),
    ("mu1", '\u{00b5}'),
    ("muasquare", '\u{3382}'),
    ("muchgreater", '\u{226b}'),
    ("muchless", '\u{226a}'),
    ("mufsquare", '\u{338c}'),
    ("mugreek", '\u{03bc}'),
    ("mugsquare", '\u{338d}'),
    ("muhiragana", '\u{3080}'),
    ("mukatakana", '\u{30e0}'),
    ("mukatakanahalfwidth", '\u{ff91}'),
    ("mulsquare", '\u{3395}'),
    ("multiply", '\u{00d7}'),
    ("mumsquare", '\u{339b}'),
    ("munahhebrew", '\u{05a3}'),
    ("munahlefthebrew", '\u{05a3}'),
    ("musicalnote", '\u{266a}'),
    ("musicalnotedbl", '\u{266b}'),
    ("musicflatsign", '\u{266d}'),
    ("musicsharpsign", '\u{266f}'),
    ("mussquare", '\u{33b2}'),
    ("muvsquare", '\u{33b6}'),
    ("muwsquare", '\u{33bc}'),
    ("mvmegasquare", '\u{33b9}'),
    ("mvsquare", '\u{33b7}'),
    ("mwmegasquare", '\u{33bf}'),
    ("mwsquare", '\u{33bd}'),
    ("n", '\u{006e}'),
    ("nabengali", '\u{09a8}'),
    ("nabla", '\u{2207}'),
    ("nacute", '\u{0144}'),
    ("nadeva", '\u{0928}'),
    ("nagujarati", '\u{0aa8}'),
    ("nagurmukhi", '\u{0a28}'),
    ("nahiragana", '\u{306a}'),
    ("nakatakana", '\u{30ca}'),
    ("nakatakanahalfwidth", '\u{ff85}'),
    ("napostrophe", '\u{0149}'),
    ("nasquare", '\u{3381}'),
    ("natural", '\u{266e}'),
    ("nbopomofo", '\u{310b}'),
    ("nbspace", '\u{00a0}'),
    ("ncaron", '\u{0148}'),
    ("ncedilla", '\u{0146}'),
    ("ncircle", '\u{24dd}'),
    ("ncircumflexbelow", '\u{1e4b}'),
    ("ncommaaccent", '\u{0146}'),
    ("ndotaccent", '\u{1e45}'),
    ("ndotbelow", '\u{1e47}'),
    ("negationslash", '\u{0338}'),
    ("nehiragana", '\u{306d}'),
    ("nekatakana", '\u{30cd}'),
    ("nekatakanahalfwidth", '\u{ff88}'),
    ("newsheqelsign", '\u{20aa}'),
    ("nfsquare", '\u{338b}'),
    ("ng", '\u{014b}'),
    ("ngabengali", '\u{0999}'),
    ("ngadeva", '\u{0919}'),
    ("ngagujarati", '\u{0a99}'),
    ("ngagurmukhi", '\u{0a19}'),
    ("ngonguthai", '\u{0e07}'),
    ("nhiragana", '\u{3093}'),
    ("nhookleft", '\u{0272}'),
    ("nhookretroflex", '\u{0273}'),
    ("nieunacirclekorean", '\u{326f}'),
    ("nieunaparenkorean", '\u{320f}'),
    ("nieuncieuckorean", '\u{3135}'),
    ("nieuncirclekorean", '\u{3261}'),
    ("nieunhieuhkorean", '\u{3136}'),
    ("nieunkorean", '\u{3134}'),
    ("nieunpansioskorean", '\u{3168}'),
    ("nieunparenkorean", '\u{3201}'),
    ("nieunsioskorean", '\u{3167}'),
    ("nieuntikeutkorean", '\u{3166}'),
    ("nihiragana", '\u{306b}'),
    ("nikatakana", '\u{30cb}'),
    ("nikatakanahalfwidth", '\u{ff86}'),
    ("nikhahitleftthai", '\u{f899}'),
    ("nikhahitthai", '\u{0e4d}'),
    ("nine", '\u{0039}'),
    ("ninearabic", '\u{0669}'),
    ("ninebengali", '\u{09ef}'),
    ("ninecircle", '\u{2468}'),
    ("ninecircleinversesansserif", '\u{2792}'),
    ("ninedeva", '\u{096f}'),
    ("ninegujarati", '\u{0aef}'),
    ("ninegurmukhi", '\u{0a6f}'),
    ("ninehackarabic", '\u{0669}'),
    ("ninehangzhou", '\u{3029}'),
    ("nineideographicparen", '\u{3228}'),
    ("nineinferior", '\u{2089}'),
    ("ninemonospace", '\u{ff19}'),
    ("nineoldstyle", '\u{f739}'),
    ("nineparen", '\u{247c}'),
    ("nineperiod", '\u{2490}'),
    ("ninepersian", '\u{06f9}'),
    ("nineroman", '\u{2178}'),
    ("ninesuperior", '\u{2079}'),
    ("nineteencircle", '\u{2472}'),
    ("nineteenparen", '\u{2486}'),
    ("nineteenperiod", '\u{249a}'),
    ("ninethai", '\u{0e59}'),
    ("nj", '\u{01cc}'),
    ("njecyrillic", '\u{045a}'),
    ("nkatakana", '\u{30f3}'),
    ("nkatakanahalfwidth", '\u{ff9d}'),
    ("nlegrightlong", '\u{019e}'),
    ("nlinebelow", '\u{1e49}'),
    ("nmonospace", '\u{ff4e}'),
    ("nmsquare", '\u{339a}'),
    ("nnabengali", '\u{09a3}'),
    ("nnadeva", '\u{0923}'),
    ("nnagujarati", '\u{0aa3}'),
    ("nnagurmukhi", '\u{0a23}'),
    ("nnnadeva", '\u{0929}'),
    ("nohiragana", '\u{306e}'),
    ("nokatakana", '\u{30ce}'),
    ("nokatakanahalfwidth", '\u{ff89}'),
    ("nonbreakingspace", '\u{00a0}'),
    ("nonenthai", '\u{0e13}'),
    ("nonuthai", '\u{0e19}'),
    ("noonarabic", '\u{0646}'),
    ("noonfinalarabic", '\u{fee6}'),
    ("noonghunnaarabic", '\u{06ba}'),
    ("noonghunnafinalarabic", '\u{fb9f}'),
    ("noonhehinitialarabic", '\u{fee7}'),
    ("nooninitialarabic", '\u{fee7}'),
    ("noonjeeminitialarabic", '\u{fcd2}'),
    ("noonjeemisolatedarabic", '\u{fc4b}'),
    ("noonmedialarabic", '\u{fee8}'),
    ("noonmeeminitialarabic", '\u{fcd5}'),
    ("noonmeemisolatedarabic", '\u{fc4e}'),
    ("noonnoonfinalarabic", '\u{fc8d}'),
    ("notcontains", '\u{220c}'),
    ("notelement", '\u{2209}'),
    ("notelementof", '\u{2209}'),
    ("notequal", '\u{2260}'),
    ("notgreater", '\u{226f}'),
    ("notgreaternorequal", '\u{2271}'),
    ("notgreaternorless", '\u{2279}'),
    ("notidentical", '\u{2262}'),
    ("notless", '\u{226e}'),
    ("notlessnorequal", '\u{2270}'),
    ("notparallel", '\u{2226}'),
    ("notprecedes", '\u{2280}'),
    ("notsubset", '\u{2284}'),
    ("notsucceeds", '\u{2281}'),
    ("notsuperset", '\u{2285}'),
    ("nowarmenian", '\u{0576}'),
    ("nparen", '\u{24a9}'),
    ("nssquare", '\u{33b1}'),
    ("nsuperior", '\u{207f}'),
    ("ntilde", '\u{00f1}'),
    ("nu", '\u{03bd}'),
    ("nuhiragana", '\u{306c}'),
    ("nukatakana", '\u{30cc}'),
    ("nukatakanahalfwidth", '\u{ff87}'),
    ("nuktabengali", '\u{09bc}'),
    ("nuktadeva", '\u{093c}'),
    ("nuktagujarati", '\u{0abc}'),
    ("nuktagurmukhi", '\u{0a3c}'),
    ("numbersign", '\u{0023}'),
    ("numbersignmonospace", '\u{ff03}'),
    ("numbersignsmall", '\u{fe5f}'),
    ("numeralsigngreek", '\u{0374}'),
    ("numeralsignlowergreek", '\u{0375}'),
    ("numero", '\u{2116}'),
    ("nun", '\u{05e0}'),
    ("nundagesh", '\u{fb40}'),
    ("nundageshhebrew", '\u{fb40}'),
    ("nunhebrew", '\u{05e0}'),
    ("nvsquare", '\u{33b5}'),
    ("nwsquare", '\u{33bb}'),
    ("nyabengali", '\u{099e}'),
    ("nyadeva", '\u{091e}'),
    ("nyagujarati", '\u{0a9e}'),
    ("nyagurmukhi", '\u{0a1e}'),
    ("o", '\u{006f}'),
    ("oacute", '\u{00f3}'),
    ("oangthai", '\u{0e2d}'),
    ("obarred", '\u{0275}'),
    ("obarredcyrillic", '\u{04e9}'),
    ("obarreddieresiscyrillic", '\u{04eb}'),
    ("obengali", '\u{0993}'),
    ("obopomofo", '\u{311b}'),
    ("obreve", '\u{014f}'),
    ("ocandradeva", '\u{0911}'),
    ("ocandragujarati", '\u{0a91}'),
    ("ocandravowelsigndeva", '\u{0949}'),
    ("ocandravowelsigngujarati", '\u{0ac9}'),
    ("ocaron", '\u{01d2}'),
    ("ocircle", '\u{24de}'),
    ("ocircumflex", '\u{00f4}'),
    ("ocircumflexacute", '\u{1ed1}'),
    ("ocircumflexdotbelow", '\u{1ed9}'),
    ("ocircumflexgrave", '\u{1ed3}'),
    ("ocircumflexhookabove", '\u{1ed5}'),
    ("ocircumflextilde", '\u{1ed7}'),
    ("ocyrillic", '\u{043e}'),
    ("odblacute", '\u{0151}'),
    ("odblgrave", '\u{020d}'),
    ("odeva", '\u{0913}'),
    ("odieresis", '\u{00f6}'),
    ("odieresiscyrillic", '\u{04e7}'),
    ("odotbelow", '\u{1ecd}'),
    ("oe", '\u{0153}'),
    ("oekorean", '\u{315a}'),
    ("ogonek", '\u{02db}'),
    ("ogonekcmb", '\u{0328}'),
    ("ograve", '\u{00f2}'),
    ("ogujarati", '\u{0a93}'),
    ("oharmenian", '\u{0585}'),
    ("ohiragana", '\u{304a}'),
    ("ohookabove", '\u{1ecf}'),
    ("ohorn", '\u{01a1}'),
    ("ohornacute", '\u{1edb}'),
    ("ohorndotbelow", '\u{1ee3}'),
    ("ohorngrave", '\u{1edd}'),
    ("ohornhookabove", '\u{1edf}'),
    ("ohorntilde", '\u{1ee1}'),
    ("ohungarumlaut", '\u{0151}'),
    ("oi", '\u{01a3}'),
    ("oinvertedbreve", '\u{020f}'),
    ("okatakana", '\u{30aa}'),
    ("okatakanahalfwidth", '\u{ff75}'),
    ("okorean", '\u{3157}'),
    ("olehebrew", '\u{05ab}'),
    ("omacron", '\u{014d}'),
    ("omacronacute", '\u{1e53}'),
    ("omacrongrave", '\u{1e51}'),
    ("omdeva", '\u{0950}'),
    ("omega", '\u{03c9}'),
    ("omega1", '\u{03d6}'),
    ("omegacyrillic", '\u{0461}'),
    ("omegalatinclosed", '\u{0277}'),
    ("omegaroundcyrillic", '\u{047b}'),
    ("omegatitlocyrillic", '\u{047d}'),
    ("omegatonos", '\u{03ce}'),
    ("omgujarati", '\u{0ad0}'),
    ("omicron", '\u{03bf}'),
    ("omicrontonos", '\u{03cc}'),
    ("omonospace", '\u{ff4f}'),
    ("one", '\u{0031}'),
    ("onearabic", '\u{0661}'),
    ("onebengali", '\u{09e7}'),
    ("onecircle", '\u{2460}'),
    ("onecircleinversesansserif", '\u{278a}'),
    ("onedeva", '\u{0967}'),
    ("onedotenleader", '\u{2024}'),
    ("oneeighth", '\u{215b}'),
    ("onefitted", '\u{f6dc}'),
    ("onegujarati", '\u{0ae7}'),
    ("onegurmukhi", '\u{0a67}'),
    ("onehackarabic", '\u{0661}'),
    ("onehalf", '\u{00bd}'),
    ("onehangzhou", '\u{3021}'),
    ("oneideographicparen", '\u{3220}'),
    ("oneinferior", '\u{2081}'),
    ("onemonospace", '\u{ff11}'),
    ("onenumeratorbengali", '\u{09f4}'),
    ("oneoldstyle", '\u{f731}'),
    ("oneparen", '\u{2474}'),
    ("oneperiod", '\u{2488}'),
    ("onepersian", '\u{06f1}'),
    ("onequarter", '\u{00bc}'),
    ("oneroman", '\u{2170}'),
    ("onesuperior", '\u{00b9}'),
    ("onethai", '\u{0e51}'),
    ("onethird", '\u{2153}'),
    ("oogonek", '\u{01eb}'),
    ("oogonekmacron", '\u{01ed}'),
    ("oogurmukhi", '\u{0a13}'),
    ("oomatragurmukhi", '\u{0a4b}'),
    ("oopen", '\u{0254}'),
    ("oparen", '\u{24aa}'),
    ("openbullet", '\u{25e6}'),
    ("option", '\u{2325}'),
    ("ordfeminine", '\u{00aa}'),
    ("ordmasculine", '\u{00ba}'),
    ("orthogonal", '\u{221f}'),
    ("oshortdeva", '\u{0912}'),
    ("oshortvowelsigndeva", '\u{094a}'),
    ("oslash", '\u{00f8}'),
    ("oslashacute", '\u{01ff}'),
    ("osmallhiragana", '\u{3049}'),
    ("osmallkatakana", '\u{30a9}'),
    ("osmallkatakanahalfwidth", '\u{ff6b}'),
    ("ostrokeacute", '\u{01ff}'),
    ("osuperior", '\u{f6f0}'),
    ("otcyrillic", '\u{047f}'),
    ("otilde", '\u{00f5}'),
    ("otildeacute", '\u{1e4d}'),
    ("otildedieresis", '\u{1e4f}'),
    ("oubopomofo", '\u{3121}'),
    ("overline", '\u{203e}'),
    ("overlinecenterline", '\u{fe4a}'),
    ("overlinecmb", '\u{0305}'),
    ("overlinedashed", '\u{fe49}'),
    ("overlinedblwavy", '\u{fe4c}'),
    ("overlinewavy", '\u{fe4b}'),
    ("overscore", '\u{00af}'),
    ("ovowelsignbengali", '\u{09cb}'),
    ("ovowelsigndeva", '\u{094b}'),
    ("ovowelsigngujarati", '\u{0acb}'),
    ("owner", '\u{220b}'),
    ("p", '\u{0070}'),
    ("paampssquare", '\u{3380}'),
    ("paasentosquare", '\u{332b}'),
    ("pabengali", '\u{09aa}'),
    ("pacute", '\u{1e55}'),
    ("padeva", '\u{092a}'),
    ("pagedown", '\u{21df}'),
    ("pageup", '\u{21de}'),
    ("pagujarati", '\u{0aaa}'),
    ("pagurmukhi", '\u{0a2a}'),
    ("pahiragana", '\u{3071}'),
    ("paiyannoithai", '\u{0e2f}'),
    ("pakatakana", '\u{30d1}'),
    ("palatalizationcyrilliccmb", '\u{0484}'),
    ("palochkacyrillic", '\u{04c0}'),
    ("pansioskorean", '\u{317f}'),
    ("paragraph", '\u{00b6}'),
    ("parallel", '\u{2225}'),
    ("parenleft", '\u{0028}'),
    ("parenleftBig", '\u{0028}'),
    ("parenleftBigg", '\u{0028}'),
    ("parenleftaltonearabic", '\u{fd3e}'),
    ("parenleftbig", '\u{0028}'),
    ("parenleftbigg", '\u{0028}'),
    ("parenleftbt", '\u{f8ed}'),
    ("parenleftex", '\u{007c}'),
    ("parenleftex2", '\u{f8ec}'),
    ("parenleftinferior", '\u{208d}'),
    ("parenleftmonospace", '\u{ff08}'),
    ("parenleftsmall", '\u{fe59}'),
    ("parenleftsuperior", '\u{207d}'),
    ("parenlefttp", '\u{f8eb}'),
    ("parenleftvertical", '\u{fe35}'),
    ("parenright", '\u{0029}'),
    ("parenrightBig", '\u{0029}'),
    ("parenrightBigg", '\u{0029}'),
    ("parenrightaltonearabic", '\u{fd3f}'),
    ("parenrightbig", '\u{0029}'),
    ("parenrightbigg", '\u{0029}'),
    ("parenrightbt", '\u{f8f8}'),
    ("parenrightex", '\u{007c}'),
    ("parenrightex2", '\u{f8f7}'),
    ("parenrightinferior", '\u{208e}'),
    ("parenrightmonospace", '\u{ff09}'),
    ("parenrightsmall", '\u{fe5a}'),
    ("parenrightsuperior", '\u{207e}'),
    ("parenrighttp", '\u{f8f6}'),
    ("parenrightvertical", '\u{fe36}'),
    ("partialdiff", '\u{2202}'),
    ("paseqhebrew", '\u{05c0}'),
    ("pashtahebrew", '\u{0599}'),
    ("pasquare", '\u{33a9}'),
    ("patah", '\u{05b7}'),
    ("patah11", '\u{05b7}'),
    ("patah1d", '\u{05b7}'),
    ("patah2a", '\u{05b7}'),
    ("patahhebrew", '\u{05b7}'),
    ("patahnarrowhebrew", '\u{05b7}'),
    ("patahquarterhebrew", '\u{05b7}'),
    ("patahwidehebrew", '\u{05b7}'),
    ("pazerhebrew", '\u{05a1}'),
    ("pbopomofo", '\u{3106}'),
    ("pcircle", '\u{24df}'),
    ("pdotaccent", '\u{1e57}'),
    ("pe", '\u{05e4}'),
    ("pecyrillic", '\u{043f}'),
    ("pedagesh", '\u{fb44}'),
    ("pedageshhebrew", '\u{fb44}'),
    ("peezisquare", '\u{333b}'),
    ("pefinaldageshhebrew", '\u{fb43}'),
    ("peharabic", '\u{067e}'),
    ("peharmenian", '\u{057a}'),
    ("pehebrew", '\u{05e4}'),
    ("pehfinalarabic", '\u{fb57}'),
    ("pehinitialarabic", '\u{fb58}'),
    ("pehiragana", '\u{307a}'),
    ("pehmedialarabic", '\u{fb59}'),
    ("pekatakana", '\u{30da}'),
    ("pemiddlehookcyrillic", '\u{04a7}'),
    ("perafehebrew", '\u{fb4e}'),
    ("percent", '\u{0025}'),
    ("percentarabic", '\u{066a}'),
    ("percentmonospace", '\u{ff05}'),
    ("percentsmall", '\u{fe6a}'),
    ("period", '\u{002e}'),
    ("periodarmenian", '\u{0589}'),
    ("periodcentered", '\u{00b7}'),
    ("periodhalfwidth", '\u{ff61}'),
    ("periodinferior", '\u{f6e7}'),
    ("periodmonospace", '\u{ff0e}'),
    ("periodsmall", '\u{fe52}'),
    ("periodsuperior", '\u{f6e8}'),
    ("perispomenigreekcmb", '\u{0342}'),
    ("perpendicular", '\u{22a5}'),
    ("pertenthousand", '\u{2031}'),
    ("perthousand", '\u{2030}'),
    ("peseta", '\u{20a7}'),
    ("pfsquare", '\u{338a}'),
    ("phabengali", '\u{09ab}'),
    ("phadeva", '\u{092b}'),
    ("phagujarati", '\u{0aab}'),
    ("phagurmukhi", '\u{0a2b}'),
    ("phi", '\u{03c6}'),
    ("phi2", '\u{03d5}'),
    ("phieuphacirclekorean", '\u{327a}'),
    ("phieuphaparenkorean", '\u{321a}'),
    ("phieuphcirclekorean", '\u{326c}'),
    ("phieuphkorean", '\u{314d}'),
    ("phieuphparenkorean", '\u{320c}'),
    ("philatin", '\u{0278}'),
    ("phinthuthai", '\u{0e3a}'),
    ("phisymbolgreek", '\u{03d5}'),
    ("phook", '\u{01a5}'),
    ("phophanthai", '\u{0e1e}'),
    ("phophungthai", '\u{0e1c}'),
    ("phosamphaothai", '\u{0e20}'),
    ("pi", '\u{03c0}'),
    ("pi1", '\u{03d6}'),
    ("pieupacirclekorean", '\u{3273}'),
    ("pieupaparenkorean", '\u{3213}'),
    ("pieupcieuckorean", '\u{3176}'),
    ("pieupcirclekorean", '\u{3265}'),
    ("pieupkiyeokkorean", '\u{3172}'),
    ("pieupkorean", '\u{3142}'),
    ("pieupparenkorean", '\u{3205}'),
    ("pieupsioskiyeokkorean", '\u{3174}'),
    ("pieupsioskorean", '\u{3144}'),
    ("pieupsiostikeutkorean", '\u{3175}'),
    ("pieupthieuthkorean", '\u{3177}'),
    ("pieuptikeutkorean", '\u{3173}'),
    ("pihiragana", '\u{3074}'),
    ("pikatakana", '\u{30d4}'),
    ("pisymbolgreek", '\u{03d6}'),
    ("piwrarmenian", '\u{0583}'),
    ("plus", '\u{002b}'),
    ("plusbelowcmb", '\u{031f}'),
    ("pluscircle", '\u{2295}'),
    ("plusminus", '\u{00b1}'),
    ("plusmod", '\u{02d6}'),
    ("plusmonospace", '\u{ff0b}'),
    ("plussmall", '\u{fe62}'),
    ("plussuperior", '\u{207a}'),
    ("pmonospace", '\u{ff50}'),
    ("pmsquare", '\u{33d8}'),
    ("pohiragana", '\u{307d}'),
    ("pointingindexdownwhite", '\u{261f}'),
    ("pointingindexleftwhite", '\u{261c}'),
    ("pointingindexrightwhite", '\u{261e}'),
    ("pointingindexupwhite", '\u{261d}'),
    ("pokatakana", '\u{30dd}'),
    ("poplathai", '\u{0e1b}'),
    ("postalmark", '\u{3012}'),
    ("postalmarkface", '\u{3020}'),
    ("pparen", '\u{24ab}'),
    ("precedes", '\u{227a}'),
    ("precedesequal", '\u{227c}'),
    ("prescription", '\u{211e}'),
    ("prime", '\u{2032}'),
    ("primemod", '\u{02b9}'),
    ("primereversed", '\u{2035}'),
    ("product", '\u{220f}'),
    ("productdisplay", '\u{220f}'),
    ("producttext", '\u{220f}'),
    ("projective", '\u{2305}'),
    ("prolongedkana", '\u{30fc}'),
    ("propellor", '\u{2318}'),
    ("propersubset", '\u{2282}'),
    ("propersuperset", '\u{2283}'),
    ("proportion", '\u{2237}'),
    ("proportional", '\u{221d}'),
    ("psi", '\u{03c8}'),
    ("psicyrillic", '\u{0471}'),
    ("psilipneumatacyrilliccmb", '\u{0486}'),
    ("pssquare", '\u{33b0}'),
    ("puhiragana", '\u{3077}'),
    ("pukatakana", '\u{30d7}'),
    ("punctdash", '\u{2014}'),
    ("pvsquare", '\u{33b4}'),
    ("pwsquare", '\u{33ba}'),
    ("q", '\u{0071}'),
    ("qadeva", '\u{0958}'),
    ("qadmahebrew", '\u{05a8}'),
    ("qafarabic", '\u{0642}'),
    ("qaffinalarabic", '\u{fed6}'),
    ("qafinitialarabic", '\u{fed7}'),
    ("qafmedialarabic", '\u{fed8}'),
    ("qamats", '\u{05b8}'),
    ("qamats10", '\u{05b8}'),
    ("qamats1a", '\u{05b8}'),
    ("qamats1c", '\u{05b8}'),
    ("qamats27", '\u{05b8}'),
    ("qamats29", '\u{05b8}'),
    ("qamats33", '\u{05b8}'),
    ("qamatsde", '\u{05b8}'),
    ("qamatshebrew", '\u{05b8}'),
    ("qamatsnarrowhebrew", '\u{05b8}'),
    ("qamatsqatanhebrew", '\u{05b8}'),
    ("qamatsqatannarrowhebrew", '\u{05b8}'),
    ("qamatsqatanquarterhebrew", '\u{05b8}'),
    ("qamatsqatanwidehebrew", '\u{05b8}'),
    ("qamatsquarterhebrew", '\u{05b8}'),
    ("qamatswidehebrew", '\u{05b8}'),
    ("qarneyparahebrew", '\u{059f}'),
    ("qbopomofo", '\u{3111}'),
    ("qcircle", '\u{24e0}'),
    ("qhook", '\u{02a0}'),
    ("qmonospace", '\u{ff51}'),
    ("qof", '\u{05e7}'),
    ("qofdagesh", '\u{fb47}'),
    ("qofdageshhebrew", '\u{fb47}'),
    ("qofhatafpatah", '\u{05e7}'),
    ("qofhatafpatahhebrew", '\u{05e7}'),
    ("qofhatafsegol", '\u{05e7}'),
    ("qofhatafsegolhebrew", '\u{05e7}'),
    ("qofhebrew", '\u{05e7}'),
    ("qofhiriq", '\u{05e7}'),
    ("qofhiriqhebrew", '\u{05e7}'),
    ("qofholam", '\u{05e7}'),
    ("qofholamhebrew", '\u{05e7}'),
    ("qofpatah", '\u{05e7}'),
    ("qofpatahhebrew", '\u{05e7}'),
    ("qofqamats", '\u{05e7}'),
    ("qofqamatshebrew", '\u{05e7}'),
    ("qofqubuts", '\u{05e7}'),
    ("qofqubutshebrew", '\u{05e7}'),
    ("qofsegol", '\u{05e7}'),
    ("qofsegolhebrew", '\u{05e7}'),
    ("qofsheva", '\u{05e7}'),
    ("qofshevahebrew", '\u{05e7}'),
    ("qoftsere", '\u{05e7}'),
    ("qoftserehebrew", '\u{05e7}'),
    ("qparen", '\u{24ac}'),
    ("quarternote", '\u{2669}'),
    ("qubuts", '\u{05bb}'),
    ("qubuts18", '\u{05bb}'),
    ("qubuts25", '\u{05bb}'),
    ("qubuts31", '\u{05bb}'),
    ("qubutshebrew", '\u{05bb}'),
    ("qubutsnarrowhebrew", '\u{05bb}'),
    ("qubutsquarterhebrew", '\u{05bb}'),
    ("qubutswidehebrew", '\u{05bb}'),
    ("question", '\u{003f}'),
    ("questionarabic", '\u{061f}'),
    ("questionarmenian", '\u{055e}'),
    ("questiondown", '\u{00bf}'),
    ("questiondownsmall", '\u{f7bf}'),
    ("questiongreek", '\u{037e}'),
    ("questionmonospace", '\u{ff1f}'),
    ("questionsmall", '\u{f73f}'),
    ("quotedbl", '\u{0022}'),
    ("quotedblbase", '\u{201e}'),
    ("quotedblleft", '\u{201c}'),
    ("quotedblmonospace", '\u{ff02}'),
    ("quotedblprime", '\u{301e}'),
    ("quotedblprimereversed", '\u{301d}'),
    ("quotedblright", '\u{201d}'),
    ("quoteleft", '\u{2018}'),
    ("quoteleftreversed", '\u{201b}'),
    ("quotereversed", '\u{201b}'),
    ("quoteright", '\u{2019}'),
    ("quoterightn", '\u{0149}'),
    ("quotesinglbase", '\u{201a}'),
    ("quotesingle", '\u{0027}'),
    ("quotesinglemonospace", '\u{ff07}'),
    ("r", '\u{0072}'),
    ("raarmenian", '\u{057c}'),
    ("rabengali", '\u{09b0}'),
    ("racute", '\u{0155}'),
    ("radeva", '\u{0930}'),
    ("radical", '\u{221a}'),
    ("radicalBig", '\u{221a}'),
    ("radicalBigg", '\u{221a}'),
    ("radicalbig", '\u{221a}'),
    ("radicalbigg", '\u{221a}'),
    ("radicalbt", '\u{221a}'),
    ("radicalex", '\u{f8e5}'),
    ("radoverssquare", '\u{33ae}'),
    ("radoverssquaredsquare", '\u{33af}'),
    ("radsquare", '\u{33ad}'),
    ("rafe", '\u{05bf}'),
    ("rafehebrew", '\u{05bf}'),
    ("ragujarati", '\u{0ab0}'),
    ("ragurmukhi", '\u{0a30}'),
    ("rahiragana", '\u{3089}'),
    ("rakatakana", '\u{30e9}'),
    ("rakatakanahalfwidth", '\u{ff97}'),
    ("ralowerdiagonalbengali", '\u{09f1}'),
    ("ramiddlediagonalbengali", '\u{09f0}'),
    ("ramshorn", '\u{0264}'),
    ("rangedash", '\u{2013}'),
    ("ratio", '\u{2236}'),
    ("rbopomofo", '\u{3116}'),
    ("rcaron", '\u{0159}'),
    ("rcedilla", '\u{0157}'),
    ("rcircle", '\u{24e1}'),
    ("rcommaaccent", '\u{0157}'),
    ("rdblgrave", '\u{0211}'),
    ("rdotaccent", '\u{1e59}'),
    ("rdotbelow", '\u{1e5b}'),
    ("rdotbelowmacron", '\u{1e5d}'),
    ("referencemark", '\u{203b}'),
    ("reflexsubset", '\u{2286}'),
    ("reflexsuperset", '\u{2287}'),
    ("registered", '\u{00ae}'),
    ("registersans", '\u{f8e8}'),
    ("registerserif", '\u{f6da}'),
    ("reharabic", '\u{0631}'),
    ("reharmenian", '\u{0580}'),
    ("rehfinalarabic", '\u{feae}'),
    ("rehiragana", '\u{308c}'),
    ("rehyehaleflamarabic", '\u{0631}'),
    ("rekatakana", '\u{30ec}'),
    ("rekatakanahalfwidth", '\u{ff9a}'),
    ("resh", '\u{05e8}'),
    ("reshdageshhebrew", '\u{fb48}'),
    ("reshhatafpatah", '\u{05e8}'),
    ("reshhatafpatahhebrew", '\u{05e8}'),
    ("reshhatafsegol", '\u{05e8}'),
    ("reshhatafsegolhebrew", '\u{05e8}'),
    ("reshhebrew", '\u{05e8}'),
    ("reshhiriq", '\u{05e8}'),
    ("reshhiriqhebrew", '\u{05e8}'),
    ("reshholam", '\u{05e8}'),
    ("reshholamhebrew", '\u{05e8}'),
    ("reshpatah", '\u{05e8}'),
    ("reshpatahhebrew", '\u{05e8}'),
    ("reshqamats", '\u{05e8}'),
    ("reshqamatshebrew", '\u{05e8}'),
    ("reshqubuts", '\u{05e8}'),
    ("reshqubutshebrew", '\u{05e8}'),
    ("reshsegol", '\u{05e8}'),
    ("reshsegolhebrew", '\u{05e8}'),
    ("reshsheva", '\u{05e8}'),
    ("reshshevahebrew", '\u{05e8}'),
    ("reshtsere", '\u{05e8}'),
    ("reshtserehebrew", '\u{05e8}'),
    ("reversedtilde", '\u{223d}'),
    ("reviahebrew", '\u{0597}'),
    ("reviamugrashhebrew", '\u{0597}'),
    ("revlogicalnot", '\u{2310}'),
    ("rfishhook", '\u{027e}'),
    ("rfishhookreversed", '\u{027f}'),
    ("rhabengali", '\u{09dd}'),
    ("rhadeva", '\u{095d}'),
    ("rho", '\u{03c1}'),
    ("rho1", '\u{03f1}'),
    ("rhook", '\u{027d}'),
    ("rhookturned", '\u{027b}'),
    ("rhookturnedsuperior", '\u{02b5}'),
    ("rhosymbolgreek", '\u{03f1}'),
    ("rhotichookmod", '\u{02de}'),
    ("rieulacirclekorean", '\u{3271}'),
    ("rieulaparenkorean", '\u{3211}'),
    ("rieulcirclekorean", '\u{3263}'),
    ("rieulhieuhkorean", '\u{3140}'),
    ("rieulkiyeokkorean", '\u{313a}'),
    ("rieulkiyeoksioskorean", '\u{3169}'),
    ("rieulkorean", '\u{3139}'),
    ("rieulmieumkorean", '\u{313b}'),
    ("rieulpansioskorean", '\u{316c}'),
    ("rieulparenkorean", '\u{3203}'),
    ("rieulphieuphkorean", '\u{313f}'),
    ("rieulpieupkorean", '\u{313c}'),
    ("rieulpieupsioskorean", '\u{316b}'),
    ("rieulsioskorean", '\u{313d}'),
    ("rieulthieuthkorean", '\u{313e}'),
    ("rieultikeutkorean", '\u{316a}'),
    ("rieulyeorinhieuhkorean", '\u{316d}'),
    ("rightangle", '\u{221f}'),
    ("righttackbelowcmb", '\u{0319}'),
    ("righttriangle", '\u{22bf}'),
    ("rihiragana", '\u{308a}'),
    ("rikatakana", '\u{30ea}'),
    ("rikatakanahalfwidth", '\u{ff98}'),
    ("ring", '\u{02da}'),
    ("ringbelowcmb", '\u{0325}'),
    ("ringcmb", '\u{030a}'),
    ("ringhalfleft", '\u{02bf}'),
    ("ringhalfleftarmenian", '\u{0559}'),
    ("ringhalfleftbelowcmb", '\u{031c}'),
    ("ringhalfleftcentered", '\u{02d3}'),
    ("ringhalfright", '\u{02be}'),
    ("ringhalfrightbelowcmb", '\u{0339}'),
    ("ringhalfrightcentered", '\u{02d2}'),
    ("rinvertedbreve", '\u{0213}'),
    ("rittorusquare", '\u{3351}'),
    ("rlinebelow", '\u{1e5f}'),
    ("rlongleg", '\u{027c}'),
    ("rlonglegturned", '\u{027a}'),
    ("rmonospace", '\u{ff52}'),
    ("rohiragana", '\u{308d}'),
    ("rokatakana", '\u{30ed}'),
    ("rokatakanahalfwidth", '\u{ff9b}'),
    ("roruathai", '\u{0e23}'),
    ("rparen", '\u{24ad}'),
    ("rrabengali", '\u{09dc}'),
    ("rradeva", '\u{0931}'),
    ("rragurmukhi", '\u{0a5c}'),
    ("rreharabic", '\u{0691}'),
    ("rrehfinalarabic", '\u{fb8d}'),
    ("rrvocalicbengali", '\u{09e0}'),
    ("rrvocalicdeva", '\u{0960}'),
    ("rrvocalicgujarati", '\u{0ae0}'),
    ("rrvocalicvowelsignbengali", '\u{09c4}'),
    ("rrvocalicvowelsigndeva", '\u{0944}'),
    ("rrvocalicvowelsigngujarati", '\u{0ac4}'),
    ("rsuperior", '\u{f6f1}'),
    ("rtblock", '\u{2590}'),
    ("rturned", '\u{0279}'),
    ("rturnedsuperior", '\u{02b4}'),
    ("ruhiragana", '\u{308b}'),
    ("rukatakana", '\u{30eb}'),
    ("rukatakanahalfwidth", '\u{ff99}'),
    ("rupeemarkbengali", '\u{09f2}'),
    ("rupeesignbengali", '\u{09f3}'),
    ("rupiah", '\u{f6dd}'),
    ("ruthai", '\u{0e24}'),
    ("rvocalicbengali", '\u{098b}'),
    ("rvocalicdeva", '\u{090b}'),
    ("rvocalicgujarati", '\u{0a8b}'),
    ("rvocalicvowelsignbengali", '\u{09c3}'),
    ("rvocalicvowelsigndeva", '\u{0943}'),
    ("rvocalicvowelsigngujarati", '\u{0ac3}'),
    ("s", '\u{0073}'),
    ("sabengali", '\u{09b8}'),
    ("sacute", '\u{015b}'),
    ("sacutedotaccent", '\u{1e65}'),
    ("sadarabic", '\u{0635}'),
    ("sadeva", '\u{0938}'),
    ("sadfinalarabic", '\u{feba}'),
    ("sadinitialarabic", '\u{febb}'),
    ("sadmedialarabic", '\u{febc}'),
    ("sagujarati", '\u{0ab8}'),
    ("sagurmukhi", '\u{0a38}'),
    ("sahiragana", '\u{3055}'),
    ("sakatakana", '\u{30b5}'),
    ("sakatakanahalfwidth", '\u{ff7b}'),
    ("sallallahoualayhewasallamarabic", '\u{fdfa}'),
    ("samekh", '\u{05e1}'),
    ("samekhdagesh", '\u{fb41}'),
    ("samekhdageshhebrew", '\u{fb41}'),
    ("samekhhebrew", '\u{05e1}'),
    ("saraaathai", '\u{0e32}'),
    ("saraaethai", '\u{0e41}'),
    ("saraaimaimalaithai", '\u{0e44}'),
    ("saraaimaimuanthai", '\u{0e43}'),
    ("saraamthai", '\u{0e33}'),
    ("saraathai", '\u{0e30}'),
    ("saraethai", '\u{0e40}'),
    ("saraiileftthai", '\u{f886}'),
    ("saraiithai", '\u{0e35}'),
    ("saraileftthai", '\u{f885}'),
    ("saraithai", '\u{0e34}'),
    ("saraothai", '\u{0e42}'),
    ("saraueeleftthai", '\u{f888}'),
    ("saraueethai", '\u{0e37}'),
    ("saraueleftthai", '\u{f887}'),
    ("sarauethai", '\u{0e36}'),
    ("sarauthai", '\u{0e38}'),
    ("sarauuthai", '\u{0e39}'),
    ("sbopomofo", '\u{3119}'),
    ("scaron", '\u{0161}'),
    ("scarondotaccent", '\u{1e67}'),
    ("scedilla", '\u{015f}'),
    ("schwa", '\u{0259}'),
    ("schwacyrillic", '\u{04d9}'),
    ("schwadieresiscyrillic", '\u{04db}'),
    ("schwahook", '\u{025a}'),
    ("scircle", '\u{24e2}'),
    ("scircumflex", '\u{015d}'),
    ("scommaaccent", '\u{0219}'),
    ("sdotaccent", '\u{1e61}'),
    ("sdotbelow", '\u{1e63}'),
    ("sdotbelowdotaccent", '\u{1e69}'),
    ("seagullbelowcmb", '\u{033c}'),
    ("second", '\u{2033}'),
    ("secondtonechinese", '\u{02ca}'),
    ("section", '\u{00a7}'),
    ("seenarabic", '\u{0633}'),
    ("seenfinalarabic", '\u{feb2}'),
    ("seeninitialarabic", '\u{feb3}'),
    ("seenmedialarabic", '\u{feb4}'),
    ("segol", '\u{05b6}'),
    ("segol13", '\u{05b6}'),
    ("segol1f", '\u{05b6}'),
    ("segol2c", '\u{05b6}'),
    ("segolhebrew", '\u{05b6}'),
    ("segolnarrowhebrew", '\u{05b6}'),
    ("segolquarterhebrew", '\u{05b6}'),
    ("segoltahebrew", '\u{0592}'),
    ("segolwidehebrew", '\u{05b6}'),
    ("seharmenian", '\u{057d}'),
    ("sehiragana", '\u{305b}'),
    ("sekatakana", '\u{30bb}'),
    ("sekatakanahalfwidth", '\u{ff7e}'),
    ("semicolon", '\u{003b}'),
    ("semicolonarabic", '\u{061b}'),
    ("semicolonmonospace", '\u{ff1b}'),
    ("semicolonsmall", '\u{fe54}'),
    ("semivoicedmarkkana", '\u{309c}'),
    ("semivoicedmarkkanahalfwidth", '\u{ff9f}'),
    ("sentisquare", '\u{3322}'),
    ("sentosquare", '\u{3323}'),
    ("seven", '\u{0037}'),
    ("sevenarabic", '\u{0667}'),
    ("sevenbengali", '\u{09ed}'),
    ("sevencircle", '\u{2466}'),
    ("sevencircleinversesansserif", '\u{2790}'),
    ("sevendeva", '\u{096d}'),
    ("seveneighths", '\u{215e}'),
    ("sevengujarati", '\u{0aed}'),
    ("sevengurmukhi", '\u{0a6d}'),
    ("sevenhackarabic", '\u{0667}'),
    ("sevenhangzhou", '\u{3027}'),
    ("sevenideographicparen", '\u{3226}'),
    ("seveninferior", '\u{2087}'),
    ("sevenmonospace", '\u{ff17}'),
    ("sevenoldstyle", '\u{f737}'),
    ("sevenparen", '\u{247a}'),
    ("sevenperiod", '\u{248e}'),
    ("sevenpersian", '\u{06f7}'),
    ("sevenroman", '\u{2176}'),
    ("sevensuperior", '\u{2077}'),
    ("seventeencircle", '\u{2470}'),
    ("seventeenparen", '\u{2484}'),
    ("seventeenperiod", '\u{2498}'),
    ("seventhai", '\u{0e57}'),
    ("sfthyphen", '\u{00ad}'),
    ("shaarmenian", '\u{0577}'),
    ("shabengali", '\u{09b6}'),
    ("shacyrillic", '\u{0448}'),
    ("shaddaarabic", '\u{0651}'),
    ("shaddadammaarabic", '\u{fc61}'),
    ("shaddadammatanarabic", '\u{fc5e}'),
    ("shaddafathaarabic", '\u{fc60}'),
    ("shaddafathatanarabic", '\u{0651}'),
    ("shaddakasraarabic", '\u{fc62}'),
    ("shaddakasratanarabic", '\u{fc5f}'),
    ("shade", '\u{2592}'),
    ("shadedark", '\u{2593}'),
    ("shadelight", '\u{2591}'),
    ("shademedium", '\u{2592}'),
    ("shadeva", '\u{0936}'),
    ("shagujarati", '\u{0ab6}'),
    ("shagurmukhi", '\u{0a36}'),
    ("shalshelethebrew", '\u{0593}'),
    ("sharp", '\u{266f}'),
    ("shbopomofo", '\u{3115}'),
    ("shchacyrillic", '\u{0449}'),
    ("sheenarabic", '\u{0634}'),
    ("sheenfinalarabic", '\u{feb6}'),
    ("sheeninitialarabic", '\u{feb7}'),
    ("sheenmedialarabic", '\u{feb8}'),
    ("sheicoptic", '\u{03e3}'),
    ("sheqel", '\u{20aa}'),
    ("sheqelhebrew", '\u{20aa}'),
    ("sheva", '\u{05b0}'),
    ("sheva115", '\u{05b0}'),
    ("sheva15", '\u{05b0}'),
    ("sheva22", '\u{05b0}'),
    ("sheva2e", '\u{05b0}'),
    ("shevahebrew", '\u{05b0}'),
    ("shevanarrowhebrew", '\u{05b0}'),
    ("shevaquarterhebrew", '\u{05b0}'),
    ("shevawidehebrew", '\u{05b0}'),
    ("shhacyrillic", '\u{04bb}'),
    ("shimacoptic", '\u{03ed}'),
    ("shin", '\u{05e9}'),
    ("shindagesh", '\u{fb49}'),
    ("shindageshhebrew", '\u{fb49}'),
    ("shindageshshindot", '\u{fb2c}'),
    ("shindageshshindothebrew", '\u{fb2c}'),
    ("shindageshsindot", '\u{fb2d}'),
    ("shindageshsindothebrew", '\u{fb2d}'),
    ("shindothebrew", '\u{05c1}'),
    ("shinhebrew", '\u{05e9}'),
    ("shinshindot", '\u{fb2a}'),
    ("shinshindothebrew", '\u{fb2a}'),
    ("shinsindot", '\u{fb2b}'),
    ("shinsindothebrew", '\u{fb2b}'),
    ("shook", '\u{0282}'),
    ("sigma", '\u{03c3}'),
    ("sigma1", '\u{03c2}'),
    ("sigmafinal", '\u{03c2}'),
    ("sigmalunatesymbolgreek", '\u{03f2}'),
    ("sihiragana", '\u{3057}'),
    ("sikatakana", '\u{30b7}'),
    ("sikatakanahalfwidth", '\u{ff7c}'),
    ("siluqhebrew", '\u{05bd}'),
    ("siluqlefthebrew", '\u{05bd}'),
    ("similar", '\u{223c}'),
    ("similarequal", '\u{2243}'),
    ("sindothebrew", '\u{05c2}'),
    ("siosacirclekorean", '\u{3274}'),
    ("siosaparenkorean", '\u{3214}'),
    ("sioscieuckorean", '\u{317e}'),
    ("sioscirclekorean", '\u{3266}'),
    ("sioskiyeokkorean", '\u{317a}'),
    ("sioskorean", '\u{3145}'),
    ("siosnieunkorean", '\u{317b}'),
    ("siosparenkorean", '\u{3206}'),
    ("siospieupkorean", '\u{317d}'),
    ("siostikeutkorean", '\u{317c}'),
    ("six", '\u{0036}'),
    ("sixarabic", '\u{0666}'),
    ("sixbengali", '\u{09ec}'),
    ("sixcircle", '\u{2465}'),
    ("sixcircleinversesansserif", '\u{278f}'),
    ("sixdeva", '\u{096c}'),
    ("sixgujarati", '\u{0aec}'),
    ("sixgurmukhi", '\u{0a6c}'),
    ("sixhackarabic", '\u{0666}'),
    ("sixhangzhou", '\u{3026}'),
    ("sixideographicparen", '\u{3225}'),
    ("sixinferior", '\u{2086}'),
    ("sixmonospace", '\u{ff16}'),
    ("sixoldstyle", '\u{f736}'),
    ("sixparen", '\u{2479}'),
    ("sixperiod", '\u{248d}'),
    ("sixpersian", '\u{06f6}'),
    ("sixroman", '\u{2175}'),
    ("sixsuperior", '\u{2076}'),
    ("sixteencircle", '\u{246f}'),
    ("sixteencurrencydenominatorbengali", '\u{09f9}'),
    ("sixteenparen", '\u{2483}'),
    ("sixteenperiod", '\u{2497}'),
    ("sixthai", '\u{0e56}'),
    ("slash", '\u{002f}'),
    ("slashBig", '\u{2215}'),
    ("slashBigg", '\u{2215}'),
    ("slashbig", '\u{2215}'),
    ("slashbigg", '\u{2215}'),
    ("slashmonospace", '\u{ff0f}'),
    ("slong", '\u{017f}'),
    ("slongdotaccent", '\u{1e9b}'),
    ("slurabove", '\u{2322}'),
    ("slurbelow", '\u{2323}'),
    ("smileface", '\u{263a}'),
    ("smonospace", '\u{ff53}'),
    ("sofpasuqhebrew", '\u{05c3}'),
    ("softhyphen", '\u{00ad}'),
    ("softsigncyrillic", '\u{044c}'),
    ("sohiragana", '\u{305d}'),
    ("sokatakana", '\u{30bd}'),
    ("sokatakanahalfwidth", '\u{ff7f}'),
    ("soliduslongoverlaycmb", '\u{0338}'),
    ("solidusshortoverlaycmb", '\u{0337}'),
    ("sorusithai", '\u{0e29}'),
    ("sosalathai", '\u{0e28}'),
    ("sosothai", '\u{0e0b}'),
    ("sosuathai", '\u{0e2a}'),
    ("space", '\u{0020}'),
    ("spacehackarabic", '\u{0020}'),
    ("spade", '\u{2660}'),
    ("spadesuitblack", '\u{2660}'),
    ("spadesuitwhite", '\u{2664}'),
    ("sparen", '\u{24ae}'),
    ("squarebelowcmb", '\u{033b}'),
    ("squarecc", '\u{33c4}'),
    ("squarecm", '\u{339d}'),
    ("squarediagonalcrosshatchfill", '\u{25a9}'),
    ("squarehorizontalfill", '\u{25a4}'),
    ("squarekg", '\u{338f}'),
    ("squarekm", '\u{339e}'),
    ("squarekmcapital", '\u{33ce}'),
    ("squareln", '\u{33d1}'),
    ("squarelog", '\u{33d2}'),
    ("squaremg", '\u{338e}'),
    ("squaremil", '\u{33d5}'),
    ("squaremm", '\u{339c}'),
    ("squaremsquared", '\u{33a1}'),
    ("squareorthogonalcrosshatchfill", '\u{25a6}'),
    ("squareupperlefttolowerrightfill", '\u{25a7}'),
    ("squareupperrighttolowerleftfill", '\u{25a8}'),
    ("squareverticalfill", '\u{25a5}'),
    ("squarewhitewithsmallblack", '\u{25a3}'),
    ("srsquare", '\u{33db}'),
    ("ssabengali", '\u{09b7}'),
    ("ssadeva", '\u{0937}'),
    ("ssagujarati", '\u{0ab7}'),
    ("ssangcieuckorean", '\u{3149}'),
    ("ssanghieuhkorean", '\u{3185}'),
    ("ssangieungkorean", '\u{3180}'),
    ("ssangkiyeokkorean", '\u{3132}'),
    ("ssangnieunkorean", '\u{3165}'),
    ("ssangpieupkorean", '\u{3143}'),
    ("ssangsioskorean", '\u{3146}'),
    ("ssangtikeutkorean", '\u{3138}'),
    ("ssuperior", '\u{f6f2}'),
    ("star", '\u{22c6}'),
    ("sterling", '\u{00a3}'),
    ("sterlingmonospace", '\u{ffe1}'),
    ("strokelongoverlaycmb", '\u{0336}'),
    ("strokeshortoverlaycmb", '\u{0335}'),
    ("subset", '\u{2282}'),
    ("subsetnotequal", '\u{228a}'),
    ("subsetorequal", '\u{2286}'),
    ("subsetsqequal", '\u{2291}'),
    ("succeeds", '\u{227b}'),
    ("suchthat", '\u{220b}'),
    ("suhiragana", '\u{3059}'),
    ("sukatakana", '\u{30b9}'),
    ("sukatakanahalfwidth", '\u{ff7d}'),
    ("sukunarabic", '\u{0652}'),
    ("summation", '\u{2211}'),
    ("summationdisplay", '\u{2211}'),
    ("summationtext", '\u{2211}'),
    ("sun", '\u{263c}'),
    ("superset", '\u{2283}'),
    ("supersetnotequal", '\u{228b}'),
    ("supersetorequal", '\u{2287}'),
    ("supersetsqequal", '\u{2292}'),
    ("svsquare", '\u{33dc}'),
    ("syouwaerasquare", '\u{337c}'),
    ("t", '\u{0074}'),
    ("tabengali", '\u{09a4}'),
    ("tackdown", '\u{22a4}'),
    ("tackleft", '\u{22a3}'),
    ("tadeva", '\u{0924}'),
    ("tagujarati", '\u{0aa4}'),
    ("tagurmukhi", '\u{0a24}'),
    ("taharabic", '\u{0637}'),
    ("tahfinalarabic", '\u{fec2}'),
    ("tahinitialarabic", '\u{fec3}'),
    ("tahiragana", '\u{305f}'),
    ("tahmedialarabic", '\u{fec4}'),
    ("taisyouerasquare", '\u{337d}'),
    ("takatakana", '\u{30bf}'),
    ("takatakanahalfwidth", '\u{ff80}'),
    ("tatweelarabic", '\u{0640}'),
    ("tau", '\u{03c4}'),
    ("tav", '\u{05ea}'),
    ("tavdages", '\u{fb4a}'),
    ("tavdagesh", '\u{fb4a}'),
    ("tavdageshhebrew", '\u{fb4a}'),
    ("tavhebrew", '\u{05ea}'),
    ("tbar", '\u{0167}'),
    ("tbopomofo", '\u{310a}'),
    ("tcaron", '\u{0165}'),
    ("tccurl", '\u{02a8}'),
    ("tcedilla", '\u{0163}'),
    ("tcheharabic", '\u{0686}'),
    ("tchehfinalarabic", '\u{fb7b}'),
    ("tchehinitialarabic", '\u{fb7c}'),
    ("tchehmedialarabic", '\u{fb7d}'),
    ("tchehmeeminitialarabic", '\u{fb7c}'),
    ("tcircle", '\u{24e3}'),
    ("tcircumflexbelow", '\u{1e71}'),
    ("tcommaaccent", '\u{0163}'),
    ("tdieresis", '\u{1e97}'),
    ("tdotaccent", '\u{1e6b}'),
    ("tdotbelow", '\u{1e6d}'),
    ("tecyrillic", '\u{0442}'),
    ("tedescendercyrillic", '\u{04ad}'),
    ("teharabic", '\u{062a}'),
    ("tehfinalarabic", '\u{fe96}'),
    ("tehhahinitialarabic", '\u{fca2}'),
    ("tehhahisolatedarabic", '\u{fc0c}'),
    ("tehinitialarabic", '\u{fe97}'),
    ("tehiragana", '\u{3066}'),
    ("tehjeeminitialarabic", '\u{fca1}'),
    ("tehjeemisolatedarabic", '\u{fc0b}'),
    ("tehmarbutaarabic", '\u{0629}'),
    ("tehmarbutafinalarabic", '\u{fe94}'),
    ("tehmedialarabic", '\u{fe98}'),
    ("tehmeeminitialarabic", '\u{fca4}'),
    ("tehmeemisolatedarabic", '\u{fc0e}'),
    ("tehnoonfinalarabic", '\u{fc73}'),
    ("tekatakana", '\u{30c6}'),
    ("tekatakanahalfwidth", '\u{ff83}'),
    ("telephone", '\u{2121}'),
    ("telephoneblack", '\u{260e}'),
    ("telishagedolahebrew", '\u{05a0}'),
    ("telishaqetanahebrew", '\u{05a9}'),
    ("tencircle", '\u{2469}'),
    ("tenideographicparen", '\u{3229}'),
    ("tenparen", '\u{247d}'),
    ("tenperiod", '\u{2491}'),
    ("tenroman", '\u{2179}'),
    ("tesh", '\u{02a7}'),
    ("tet", '\u{05d8}'),
    ("tetdagesh", '\u{fb38}'),
    ("tetdageshhebrew", '\u{fb38}'),
    ("tethebrew", '\u{05d8}'),
    ("tetsecyrillic", '\u{04b5}'),
    ("tevirhebrew", '\u{059b}'),
    ("tevirlefthebrew", '\u{059b}'),
    ("thabengali", '\u{09a5}'),
    ("thadeva", '\u{0925}'),
    ("thagujarati", '\u{0aa5}'),
    ("thagurmukhi", '\u{0a25}'),
    ("thalarabic", '\u{0630}'),
    ("thalfinalarabic", '\u{feac}'),
    ("thanthakhatlowleftthai", '\u{f898}'),
    ("thanthakhatlowrightthai", '\u{f897}'),
    ("thanthakhatthai", '\u{0e4c}'),
    ("thanthakhatupperleftthai", '\u{f896}'),
    ("theharabic", '\u{062b}'),
    ("thehfinalarabic", '\u{fe9a}'),
    ("thehinitialarabic", '\u{fe9b}'),
    ("thehmedialarabic", '\u{fe9c}'),
    ("thereexists", '\u{2203}'),
    ("therefore", '\u{2234}'),
    ("theta", '\u{03b8}'),
    ("theta1", '\u{03d1}'),
    ("thetasymbolgreek", '\u{03d1}'),
    ("thieuthacirclekorean", '\u{3279}'),
    ("thieuthaparenkorean", '\u{3219}'),
    ("thieuthcirclekorean", '\u{326b}'),
    ("thieuthkorean", '\u{314c}'),
    ("thieuthparenkorean", '\u{320b}'),
    ("thirteencircle", '\u{246c}'),
    ("thirteenparen", '\u{2480}'),
    ("thirteenperiod", '\u{2494}'),
    ("thonangmonthothai", '\u{0e11}'),
    ("thook", '\u{01ad}'),
    ("thophuthaothai", '\u{0e12}'),
    ("thorn", '\u{00fe}'),
    ("thothahanthai", '\u{0e17}'),
    ("thothanthai", '\u{0e10}'),
    ("thothongthai", '\u{0e18}'),
    ("thothungthai", '\u{0e16}'),
    ("thousandcyrillic", '\u{0482}'),
    ("thousandsseparatorarabic", '\u{066c}'),
    ("thousandsseparatorpersian", '\u{066c}'),
    ("three", '\u{0033}'),
    ("threearabic", '\u{0663}'),
    ("threebengali", '\u{09e9}'),
    ("threecircle", '\u{2462}'),
    ("threecircleinversesansserif", '\u{278c}'),
    ("threedeva", '\u{0969}'),
    ("threeeighths", '\u{215c}'),
    ("threegujarati", '\u{0ae9}'),
    ("threegurmukhi", '\u{0a69}'),
    ("threehackarabic", '\u{0663}'),
    ("threehangzhou", '\u{3023}'),
    ("threeideographicparen", '\u{3222}'),
    ("threeinferior", '\u{2083}'),
    ("threemonospace", '\u{ff13}'),
    ("threenumeratorbengali", '\u{09f6}'),
    ("threeoldstyle", '\u{f733}'),
    ("threeparen", '\u{2476}'),
    ("threeperiod", '\u{248a}'),
    ("threepersian", '\u{06f3}'),
    ("threequarters", '\u{00be}'),
    ("threequartersemdash", '\u{f6de}'),
    ("threeroman", '\u{2172}'),
    ("threesuperior", '\u{00b3}'),
    ("threethai", '\u{0e53}'),
    ("thzsquare", '\u{3394}'),
    ("tie", '\u{2040}'),
    ("tihiragana", '\u{3061}'),
    ("tikatakana", '\u{30c1}'),
    ("tikatakanahalfwidth", '\u{ff81}'),
    ("tikeutacirclekorean", '\u{3270}'),
    ("tikeutaparenkorean", '\u{3210}'),
    ("tikeutcirclekorean", '\u{3262}'),
    ("tikeutkorean", '\u{3137}'),
    ("tikeutparenkorean", '\u{3202}'),
    ("tilde", '\u{02dc}'),
    ("tildebelowcmb", '\u{0330}'),
    ("tildecmb", '\u{0303}'),
    ("tildecomb", '\u{0303}'),
    ("tildedoublecmb", '\u{0360}'),
    ("tildeoperator", '\u{223c}'),
    ("tildeoverlaycmb", '\u{0334}'),
    ("tildeverticalcmb", '\u{033e}'),
    ("tildewide", '\u{0303}'),
    ("tildewider", '\u{0303}'),
    ("tildewiderr", '\u{0303}'),
    ("timescircle", '\u{2297}'),
    ("tipehahebrew", '\u{0596}'),
    ("tipehalefthebrew", '\u{0596}'),
    ("tippigurmukhi", '\u{0a70}'),
    ("titlocyrilliccmb", '\u{0483}'),
    ("tiwnarmenian", '\u{057f}'),
    ("tlinebelow", '\u{1e6f}'),
    ("tmonospace", '\u{ff54}'),
    ("toarmenian", '\u{0569}'),
    ("tohiragana", '\u{3068}'),
    ("tokatakana", '\u{30c8}'),
    ("tokatakanahalfwidth", '\u{ff84}'),
    ("tonebarextrahighmod", '\u{02e5}'),
    ("tonebarextralowmod", '\u{02e9}'),
    ("tonebarhighmod", '\u{02e6}'),
    ("tonebarlowmod", '\u{02e8}'),
    ("tonebarmidmod", '\u{02e7}'),
    ("tonefive", '\u{01bd}'),
    ("tonesix", '\u{0185}'),
    ("tonetwo", '\u{01a8}'),
    ("tonos", '\u{0384}'),
    ("tonsquare", '\u{3327}'),
    ("topatakthai", '\u{0e0f}'),
    ("tortoiseshellbracketleft", '\u{3014}'),
    ("tortoiseshellbracketleftsmall", '\u{fe5d}'),
    ("tortoiseshellbracketleftvertical", '\u{fe39}'),
    ("tortoiseshellbracketright", '\u{3015}'),
    ("tortoiseshellbracketrightsmall", '\u{fe5e}'),
    ("tortoiseshellbracketrightvertical", '\u{fe3a}'),
    ("totaothai", '\u{0e15}'),
    ("tpalatalhook", '\u{01ab}'),
    ("tparen", '\u{24af}'),
    ("trademark", '\u{2122}'),
    ("trademarksans", '\u{f8ea}'),
    ("trademarkserif", '\u{f6db}'),
    ("tretroflexhook", '\u{0288}'),
    ("triagdn", '\u{25bc}'),
    ("triaglf", '\u{25c4}'),
    ("triagrt", '\u{25ba}'),
    ("triagup", '\u{25b2}'),
    ("triangle", '\u{25b3}'),
    ("triangleinv", '\u{25bd}'),
    ("triangleleft", '\u{25b9}'),
    ("triangleright", '\u{25c3}'),
    ("ts", '\u{02a6}'),
    ("tsadi", '\u{05e6}'),
    ("tsadidagesh", '\u{fb46}'),
    ("tsadidageshhebrew", '\u{fb46}'),
    ("tsadihebrew", '\u{05e6}'),
    ("tsecyrillic", '\u{0446}'),
    ("tsere", '\u{05b5}'),
    ("tsere12", '\u{05b5}'),
    ("tsere1e", '\u{05b5}'),
    ("tsere2b", '\u{05b5}'),
    ("tserehebrew", '\u{05b5}'),
    ("tserenarrowhebrew", '\u{05b5}'),
    ("tserequarterhebrew", '\u{05b5}'),
    ("tserewidehebrew", '\u{05b5}'),
    ("tshecyrillic", '\u{045b}'),
    ("tsuperior", '\u{f6f3}'),
    ("ttabengali", '\u{099f}'),
    ("ttadeva", '\u{091f}'),
    ("ttagujarati", '\u{0a9f}'),
    ("ttagurmukhi", '\u{0a1f}'),
    ("tteharabic", '\u{0679}'),
    ("ttehfinalarabic", '\u{fb67}'),
    ("ttehinitialarabic", '\u{fb68}'),
    ("ttehmedialarabic", '\u{fb69}'),
    ("tthabengali", '\u{09a0}'),
    ("tthadeva", '\u{0920}'),
    ("tthagujarati", '\u{0aa0}'),
    ("tthagurmukhi", '\u{0a20}'),
    ("tturned", '\u{0287}'),
    ("tuhiragana", '\u{3064}'),
    ("tukatakana", '\u{30c4}'),
    ("tukatakanahalfwidth", '\u{ff82}'),
    ("turnstileleft", '\u{22a2}'),
    ("turnstileright", '\u{22a3}'),
    ("tusmallhiragana", '\u{3063}'),
    ("tusmallkatakana", '\u{30c3}'),
    ("tusmallkatakanahalfwidth", '\u{ff6f}'),
    ("twelvecircle", '\u{246b}'),
    ("twelveparen", '\u{247f}'),
    ("twelveperiod", '\u{2493}'),
    ("twelveroman", '\u{217b}'),
    ("twelveudash", '\u{f6de}'),
    ("twentycircle", '\u{2473}'),
    ("twentyhangzhou", '\u{5344}'),
    ("twentyparen", '\u{2487}'),
    ("twentyperiod", '\u{249b}'),
    ("two", '\u{0032}'),
    ("twoarabic", '\u{0662}'),
    ("twobengali", '\u{09e8}'),
    ("twocircle", '\u{2461}'),
    ("twocircleinversesansserif", '\u{278b}'),
    ("twodeva", '\u{0968}'),
    ("twodotenleader", '\u{2025}'),
    ("twodotleader", '\u{2025}'),
    ("twodotleadervertical", '\u{fe30}'),
    ("twogujarati", '\u{0ae8}'),
    ("twogurmukhi", '\u{0a68}'),
    ("twohackarabic", '\u{0662}'),
    ("twohangzhou", '\u{3022}'),
    ("twoideographicparen", '\u{3221}'),
    ("twoinferior", '\u{2082}'),
    ("twomonospace", '\u{ff12}'),
    ("twonumeratorbengali", '\u{09f5}'),
    ("twooldstyle", '\u{f732}'),
    ("twoparen", '\u{2475}'),
    ("twoperiod", '\u{2489}'),
    ("twopersian", '\u{06f2}'),
    ("tworoman", '\u{2171}'),
    ("twostroke", '\u{01bb}'),
    ("twosuperior", '\u{00b2}'),
    ("twothai", '\u{0e52}'),
    ("twothirds", '\u{2154}'),
    ("u", '\u{0075}'),
    ("uacute", '\u{00fa}'),
    ("ubar", '\u{0289}'),
    ("ubengali", '\u{0989}'),
    ("ubopomofo", '\u{3128}'),
    ("ubreve", '\u{016d}'),
    ("ucaron", '\u{01d4}'),
    ("ucircle", '\u{24e4}'),
    ("ucircumflex", '\u{00fb}'),
    ("ucircumflexbelow", '\u{1e77}'),
    ("ucyrillic", '\u{0443}'),
    ("udattadeva", '\u{0951}'),
    ("udblacute", '\u{0171}'),
    ("udblgrave", '\u{0215}'),
    ("udeva", '\u{0909}'),
    ("udieresis", '\u{00fc}'),
    ("udieresisacute", '\u{01d8}'),
    ("udieresisbelow", '\u{1e73}'),
    ("udieresiscaron", '\u{01da}'),
    ("udieresiscyrillic", '\u{04f1}'),
    ("udieresisgrave", '\u{01dc}'),
    ("udieresismacron", '\u{01d6}'),
    ("udotbelow", '\u{1ee5}'),
    ("ugrave", '\u{00f9}'),
    ("ugujarati", '\u{0a89}'),
    ("ugurmukhi", '\u{0a09}'),
    ("uhiragana", '\u{3046}'),
    ("uhookabove", '\u{1ee7}'),
    ("uhorn", '\u{01b0}'),
    ("uhornacute", '\u{1ee9}'),
    ("uhorndotbelow", '\u{1ef1}'),
    ("uhorngrave", '\u{1eeb}'),
    ("uhornhookabove", '\u{1eed}'),
    ("uhorntilde", '\u{1eef}'),
    ("uhungarumlaut", '\u{0171}'),
    ("uhungarumlautcyrillic", '\u{04f3}'),
    ("uinvertedbreve", '\u{0217}'),
    ("ukatakana", '\u{30a6}'),
    ("ukatakanahalfwidth", '\u{ff73}'),
    ("ukcyrillic", '\u{0479}'),
    ("ukorean", '\u{315c}'),
    ("umacron", '\u{016b}'),
    ("umacroncyrillic", '\u{04ef}'),
    ("umacrondieresis", '\u{1e7b}'),
    ("umatragurmukhi", '\u{0a41}'),
    ("umonospace", '\u{ff55}'),
    ("underscore", '\u{005f}'),
    ("underscoredbl", '\u{2017}'),
    ("underscoremonospace", '\u{ff3f}'),
    ("underscorevertical", '\u{fe33}'),
    ("underscorewavy", '\u{fe4f}'),
    ("union", '\u{222a}'),
    ("uniondisplay", '\u{22c3}'),
    ("unionmulti", '\u{228e}'),
    ("unionmultidisplay", '\u{228e}'),
    ("unionmultitext", '\u{228e}'),
    ("unionsq", '\u{2294}'),
    ("unionsqdisplay", '\u{2294}'),
    ("unionsqtext", '\u{2294}'),
    ("uniontext", '\u{22c3}'),
    ("universal", '\u{2200}'),
    ("uogonek", '\u{0173}'),
    ("uparen", '\u{24b0}'),
    ("upblock", '\u{2580}'),
    ("upperdothebrew", '\u{05c4}'),
    ("upsilon", '\u{03c5}'),
    ("upsilondieresis", '\u{03cb}'),
    ("upsilondieresistonos", '\u{03b0}'),
    ("upsilonlatin", '\u{028a}'),
    ("upsilontonos", '\u{03cd}'),
    ("uptackbelowcmb", '\u{031d}'),
    ("uptackmod", '\u{02d4}'),
    ("uragurmukhi", '\u{0a73}'),
    ("uring", '\u{016f}'),
    ("ushortcyrillic", '\u{045e}'),
    ("usmallhiragana", '\u{3045}'),
    ("usmallkatakana", '\u{30a5}'),
    ("usmallkatakanahalfwidth", '\u{ff69}'),
    ("ustraightcyrillic", '\u{04af}'),
    ("ustraightstrokecyrillic", '\u{04b1}'),
    ("utilde", '\u{0169}'),
    ("utildeacute", '\u{1e79}'),
    ("utildebelow", '\u{1e75}'),
    ("uubengali", '\u{098a}'),
    ("uudeva", '\u{090a}'),
    ("uugujarati", '\u{0a8a}'),
    ("uugurmukhi", '\u{0a0a}'),
    ("uumatragurmukhi", '\u{0a42}'),
    ("uuvowelsignbengali", '\u{09c2}'),
    ("uuvowelsigndeva", '\u{0942}'),
    ("uuvowelsigngujarati", '\u{0ac2}'),
    ("uvowelsignbengali", '\u{09c1}'),
    ("uvowelsigndeva", '\u{0941}'),
    ("uvowelsigngujarati", '\u{0ac1}'),
    ("v", '\u{0076}'),
    ("vadeva", '\u{0935}'),
    ("vagujarati", '\u{0ab5}'),
    ("vagurmukhi", '\u{0a35}'),
    ("vakatakana", '\u{30f7}'),
    ("vav", '\u{05d5}'),
    ("vavdagesh", '\u{fb35}'),
    ("vavdagesh65", '\u{fb35}'),
    ("vavdageshhebrew", '\u{fb35}'),
    ("vavhebrew", '\u{05d5}'),
    ("vavholam", '\u{fb4b}'),
    ("vavholamhebrew", '\u{fb4b}'),
    ("vavvavhebrew", '\u{05f0}'),
    ("vavyodhebrew", '\u{05f1}'),
    ("vcircle", '\u{24e5}'),
    ("vdotbelow", '\u{1e7f}'),
    ("vector", '\u{20d7}'),
    ("vecyrillic", '\u{0432}'),
    ("veharabic", '\u{06a4}'),
    ("vehfinalarabic", '\u{fb6b}'),
    ("vehinitialarabic", '\u{fb6c}'),
    ("vehmedialarabic", '\u{fb6d}'),
    ("vekatakana", '\u{30f9}'),
    ("venus", '\u{2640}'),
    ("verticalbar", '\u{007c}'),
    ("verticallineabovecmb", '\u{030d}'),
    ("verticallinebelowcmb", '\u{0329}'),
    ("verticallinelowmod", '\u{02cc}'),
    ("verticallinemod", '\u{02c8}'),
    ("vewarmenian", '\u{057e}'),
    ("vhook", '\u{028b}'),
    ("vikatakana", '\u{30f8}'),
    ("viramabengali", '\u{09cd}'),
    ("viramadeva", '\u{094d}'),
    ("viramagujarati", '\u{0acd}'),
    ("visargabengali", '\u{0983}'),
    ("visargadeva", '\u{0903}'),
    ("visargagujarati", '\u{0a83}'),
    ("visiblespace", '\u{2423}'),
    ("visualspace", '\u{2423}'),
    ("vmonospace", '\u{ff56}'),
    ("voarmenian", '\u{0578}'),
    ("voicediterationhiragana", '\u{309e}'),
    ("voicediterationkatakana", '\u{30fe}'),
    ("voicedmarkkana", '\u{309b}'),
    ("voicedmarkkanahalfwidth", '\u{ff9e}'),
    ("vokatakana", '\u{30fa}'),
    ("vparen", '\u{24b1}'),
    ("vtilde", '\u{1e7d}'),
    ("vturned", '\u{028c}'),
    ("vuhiragana", '\u{3094}'),
    ("vukatakana", '\u{30f4}'),
    ("w", '\u{0077}'),
    ("wacute", '\u{1e83}'),
    ("waekorean", '\u{3159}'),
    ("wahiragana", '\u{308f}'),
    ("wakatakana", '\u{30ef}'),
    ("wakatakanahalfwidth", '\u{ff9c}'),
    ("wakorean", '\u{3158}'),
    ("wasmallhiragana", '\u{308e}'),
    ("wasmallkatakana", '\u{30ee}'),
    ("wattosquare", '\u{3357}'),
    ("wavedash", '\u{301c}'),
    ("wavyunderscorevertical", '\u{fe34}'),
    ("wawarabic", '\u{0648}'),
    ("wawfinalarabic", '\u{feee}'),
    ("wawhamzaabovearabic", '\u{0624}'),
    ("wawhamzaabovefinalarabic", '\u{fe86}'),
    ("wbsquare", '\u{33dd}'),
    ("wcircle", '\u{24e6}'),
    ("wcircumflex", '\u{0175}'),
    ("wdieresis", '\u{1e85}'),
    ("wdotaccent", '\u{1e87}'),
    ("wdotbelow", '\u{1e89}'),
    ("wehiragana", '\u{3091}'),
    ("weierstrass", '\u{2118}'),
    ("wekatakana", '\u{30f1}'),
    ("wekorean", '\u{315e}'),
    ("weokorean", '\u{315d}'),
    ("wgrave", '\u{1e81}'),
    ("whitebullet", '\u{25e6}'),
    ("whitecircle", '\u{25cb}'),
    ("whitecircleinverse", '\u{25d9}'),
    ("whitecornerbracketleft", '\u{300e}'),
    ("whitecornerbracketleftvertical", '\u{fe43}'),
    ("whitecornerbracketright", '\u{300f}'),
    ("whitecornerbracketrightvertical", '\u{fe44}'),
    ("whitediamond", '\u{25c7}'),
    ("whitediamondcontainingblacksmalldiamond", '\u{25c8}'),
    ("whitedownpointingsmalltriangle", '\u{25bf}'),
    ("whitedownpointingtriangle", '\u{25bd}'),
    ("whiteleftpointingsmalltriangle", '\u{25c3}'),
    ("whiteleftpointingtriangle", '\u{25c1}'),
    ("whitelenticularbracketleft", '\u{3016}'),
    ("whitelenticularbracketright", '\u{3017}'),
    ("whiterightpointingsmalltriangle", '\u{25b9}'),
    ("whiterightpointingtriangle", '\u{25b7}'),
    ("whitesmallsquare", '\u{25ab}'),
    ("whitesmilingface", '\u{263a}'),
    ("whitesquare", '\u{25a1}'),
    ("whitestar", '\u{2606}'),
    ("whitetelephone", '\u{260f}'),
    ("whitetortoiseshellbracketleft", '\u{3018}'),
    ("whitetortoiseshellbracketright", '\u{3019}'),
    ("whiteuppointingsmalltriangle", '\u{25b5}'),
    ("whiteuppointingtriangle", '\u{25b3}'),
    ("wihiragana", '\u{3090}'),
    ("wikatakana", '\u{30f0}'),
    ("wikorean", '\u{315f}'),
    ("wmonospace", '\u{ff57}'),
    ("wohiragana", '\u{3092}'),
    ("wokatakana", '\u{30f2}'),
    ("wokatakanahalfwidth", '\u{ff66}'),
    ("won", '\u{20a9}'),
    ("wonmonospace", '\u{ffe6}'),
    ("wowaenthai", '\u{0e27}'),
    ("wparen", '\u{24b2}'),
    ("wreathproduct", '\u{2240}'),
    ("wring", '\u{1e98}'),
    ("wsuperior", '\u{02b7}'),
    ("wturned", '\u{028d}'),
    ("wynn", '\u{01bf}'),
    ("x", '\u{0078}'),
    ("xabovecmb", '\u{033d}'),
    ("xbopomofo", '\u{3112}'),
    ("xcircle", '\u{24e7}'),
    ("xdieresis", '\u{1e8d}'),
    ("xdotaccent", '\u{1e8b}'),
    ("xeharmenian", '\u{056d}'),
    ("xi", '\u{03be}'),
    ("xmonospace", '\u{ff58}'),
    ("xparen", '\u{24b3}'),
    ("xsuperior", '\u{02e3}'),
    ("y", '\u{0079}'),
    ("yaadosquare", '\u{334e}'),
    ("yabengali", '\u{09af}'),
    ("yacute", '\u{00fd}'),
    ("yadeva", '\u{092f}'),
    ("yaekorean", '\u{3152}'),
    ("yagujarati", '\u{0aaf}'),
    ("yagurmukhi", '\u{0a2f}'),
    ("yahiragana", '\u{3084}'),
    ("yakatakana", '\u{30e4}'),
    ("yakatakanahalfwidth", '\u{ff94}'),
    ("yakorean", '\u{3151}'),
    ("yamakkanthai", '\u{0e4e}'),
    ("yasmallhiragana", '\u{3083}'),
    ("yasmallkatakana", '\u{30e3}'),
    ("yasmallkatakanahalfwidth", '\u{ff6c}'),
    ("yatcyrillic", '\u{0463}'),
    ("ycircle", '\u{24e8}'),
    ("ycircumflex", '\u{0177}'),
    ("ydieresis", '\u{00ff}'),
    ("ydotaccent", '\u{1e8f}'),
    ("ydotbelow", '\u{1ef5}'),
    ("yeharabic", '\u{064a}'),
    ("yehbarreearabic", '\u{06d2}'),
    ("yehbarreefinalarabic", '\u{fbaf}'),
    ("yehfinalarabic", '\u{fef2}'),
    ("yehhamzaabovearabic", '\u{0626}'),
    ("yehhamzaabovefinalarabic", '\u{fe8a}'),
    ("yehhamzaaboveinitialarabic", '\u{fe8b}'),
    ("yehhamzaabovemedialarabic", '\u{fe8c}'),
    ("yehinitialarabic", '\u{fef3}'),
    ("yehmedialarabic", '\u{fef4}'),
    ("yehmeeminitialarabic", '\u{fcdd}'),
    ("yehmeemisolatedarabic", '\u{fc58}'),
    ("yehnoonfinalarabic", '\u{fc94}'),
    ("yehthreedotsbelowarabic", '\u{06d1}'),
    ("yekorean", '\u{3156}'),
    ("yen", '\u{00a5}'),
    ("yenmonospace", '\u{ffe5}'),
    ("yeokorean", '\u{3155}'),
    ("yeorinhieuhkorean", '\u{3186}'),
    ("yerahbenyomohebrew", '\u{05aa}'),
    ("yerahbenyomolefthebrew", '\u{05aa}'),
    ("yericyrillic", '\u{044b}'),
    ("yerudieresiscyrillic", '\u{04f9}'),
    ("yesieungkorean", '\u{3181}'),
    ("yesieungpansioskorean", '\u{3183}'),
    ("yesieungsioskorean", '\u{3182}'),
    ("yetivhebrew", '\u{059a}'),
    ("ygrave", '\u{1ef3}'),
    ("yhook", '\u{01b4}'),
    ("yhookabove", '\u{1ef7}'),
    ("yiarmenian", '\u{0575}'),
    ("yicyrillic", '\u{0457}'),
    ("yikorean", '\u{3162}'),
    ("yinyang", '\u{262f}'),
    ("yiwnarmenian", '\u{0582}'),
    ("ymonospace", '\u{ff59}'),
    ("yod", '\u{05d9}'),
    ("yoddagesh", '\u{fb39}'),
    ("yoddageshhebrew", '\u{fb39}'),
    ("yodhebrew", '\u{05d9}'),
    ("yodyodhebrew", '\u{05f2}'),
    ("yodyodpatahhebrew", '\u{fb1f}'),
    ("yohiragana", '\u{3088}'),
    ("yoikorean", '\u{3189}'),
    ("yokatakana", '\u{30e8}'),
    ("yokatakanahalfwidth", '\u{ff96}'),
    ("yokorean", '\u{315b}'),
    ("yosmallhiragana", '\u{3087}'),
    ("yosmallkatakana", '\u{30e7}'),
    ("yosmallkatakanahalfwidth", '\u{ff6e}'),
    ("yotgreek", '\u{03f3}'),
    ("yoyaekorean", '\u{3188}'),
    ("yoyakorean", '\u{3187}'),
    ("yoyakthai", '\u{0e22}'),
    ("yoyingthai", '\u{0e0d}'),
    ("yparen", '\u{24b4}'),
    ("ypogegrammeni", '\u{037a}'),
    ("ypogegrammenigreekcmb", '\u{0345}'),
    ("yr", '\u{01a6}'),
    ("yring", '\u{1e99}'),
    ("ysuperior", '\u{02b8}'),
    ("ytilde", '\u{1ef9}'),
    ("yturned", '\u{028e}'),
    ("yuhiragana", '\u{3086}'),
    ("yuikorean", '\u{318c}'),
    ("yukatakana", '\u{30e6}'),
    ("yukatakanahalfwidth", '\u{ff95}'),
    ("yukorean", '\u{3160}'),
    ("yusbigcyrillic", '\u{046b}'),
    ("yusbigiotifiedcyrillic", '\u{046d}'),
    ("yuslittlecyrillic", '\u{0467}'),
    ("yuslittleiotifiedcyrillic", '\u{0469}'),
    ("yusmallhiragana", '\u{3085}'),
    ("yusmallkatakana", '\u{30e5}'),
    ("yusmallkatakanahalfwidth", '\u{ff6d}'),
    ("yuyekorean", '\u{318b}'),
    ("yuyeokorean", '\u{318a}'),
    ("yyabengali", '\u{09df}'),
    ("yyadeva", '\u{095f}'),
    ("z", '\u{007a}'),
    ("zaarmenian", '\u{0566}'),
    ("zacute", '\u{017a}'),
    ("zadeva", '\u{095b}'),
    ("zagurmukhi", '\u{0a5b}'),
    ("zaharabic", '\u{0638}'),
    ("zahfinalarabic", '\u{fec6}'),
    ("zahinitialarabic", '\u{fec7}'),
    ("zahiragana", '\u{3056}'),
    ("zahmedialarabic", '\u{fec8}'),
    ("zainarabic", '\u{0632}'),
    ("zainfinalarabic", '\u{feb0}'),
    ("zakatakana", '\u{30b6}'),
    ("zaqefgadolhebrew", '\u{0595}'),
    ("zaqefqatanhebrew", '\u{0594}'),
    ("zarqahebrew", '\u{0598}'),
    ("zayin", '\u{05d6}'),
    ("zayindagesh", '\u{fb36}'),
    ("zayindageshhebrew", '\u{fb36}'),
    ("zayinhebrew", '\u{05d6}'),
    ("zbopomofo", '\u{3117}'),
    ("zcaron", '\u{017e}'),
    ("zcircle", '\u{24e9}'),
    ("zcircumflex", '\u{1e91}'),
    ("zcurl", '\u{0291}'),
    ("zdot", '\u{017c}'),
    ("zdotaccent", '\u{017c}'),
    ("zdotbelow", '\u{1e93}'),
    ("zecyrillic", '\u{0437}'),
    ("zedescendercyrillic", '\u{0499}'),
    ("zedieresiscyrillic", '\u{04df}'),
    ("zehiragana", '\u{305c}'),
    ("zekatakana", '\u{30bc}'),
    ("zero", '\u{0030}'),
    ("zeroarabic", '\u{0660}'),
    ("zerobengali", '\u{09e6}'),
    ("zerodeva", '\u{0966}'),
    ("zerogujarati", '\u{0ae6}'),
    ("zerogurmukhi", '\u{0a66}'),
    ("zerohackarabic", '\u{0660}'),
    ("zeroinferior", '\u{2080}'),
    ("zeromonospace", '\u{ff10}'),
    ("zerooldstyle", '\u{f730}'),
    ("zeropersian", '\u{06f0}'),
    ("zerosuperior", '\u{2070}'),
    ("zerothai", '\u{0e50}'),
    ("zerowidthjoiner", '\u{feff}'),
    ("zerowidthnonjoiner", '\u{200c}'),
    ("zerowidthspace", '\u{200b}'),
    ("zeta", '\u{03b6}'),
    ("zhbopomofo", '\u{3113}'),
    ("zhearmenian", '\u{056a}'),
    ("zhebrevecyrillic", '\u{04c2}'),
    ("zhecyrillic", '\u{0436}'),
    ("zhedescendercyrillic", '\u{0497}'),
    ("zhedieresiscyrillic", '\u{04dd}'),
    ("zihiragana", '\u{3058}'),
    ("zikatakana", '\u{30b8}'),
    ("zinorhebrew", '\u{05ae}'),
    ("zlinebelow", '\u{1e95}'),
    ("zmonospace", '\u{ff5a}'),
    ("zohiragana", '\u{305e}'),
    ("zokatakana", '\u{30be}'),
    ("zparen", '\u{24b5}'),
    ("zretroflexhook", '\u{0290}'),
    ("zstroke", '\u{01b6}'),
    ("zuhiragana", '\u{305a}'),
    ("zukatakana", '\u{30ba}'),
];

/// Preferred glyph name for each rune, sorted by rune.
pub(crate) const GLYPH_RUNES: &[(char, &str)] = &[
    ('\u{0001}', "controlSTX"),
    ('\u{0002}', "controlSOT"),
    ('\u{0003}', "controlETX"),
    ('\u{0004}', "controlEOT"),
    ('\u{0005}', "controlENQ"),
    ('\u{0006}', "controlACK"),
    ('\u{0007}', "controlBEL"),
    ('\u{0008}', "controlBS"),
    ('\u{0009}', "controlHT"),
    ('\u{000a}', "controlLF"),
    ('\u{000b}', "controlVT"),
    ('\u{000c}', "controlFF"),
    ('\u{000d}', "controlCR"),
    ('\u{000e}', "controlSO"),
    ('\u{000f}', "controlSI"),
    ('\u{0010}', "controlDLE"),
    ('\u{0011}', "controlDC1"),
    ('\u{0012}', "controlDC2"),
    ('\u{0013}', "controlDC3"),
    ('\u{0014}', "controlDC4"),
    ('\u{0015}', "controlNAK"),
    ('\u{0016}', "controlSYN"),
    ('\u{0017}', "controlETB"),
    ('\u{0018}', "controlCAN"),
    ('\u{0019}', "controlEM"),
    ('\u{001a}', "controlSUB"),
    ('\u{001b}', "controlESC"),
    ('\u{001c}', "controlFS"),
    ('\u{001d}', "controlGS"),
    ('\u{001e}', "controlRS"),
    ('\u{001f}', "controlUS"),
    ('\u{0020}', "space"),
    ('\u{0021}', "exclam"),
    ('\u{0022}', "quotedbl"),
    ('\u{0023}', "numbersign"),
    ('\u{0024}', "dollar"),
    ('\u{0025}', "percent"),
    ('\u{0026}', "ampersand"),
    ('\u{0027}', "quotesingle"),
    ('\u{0028}', "parenleft"),
    ('\u{0029}', "parenright"),
    ('\u{002a}', "asterisk"),
    ('\u{002b}', "plus"),
    ('\u{002c}', "comma"),
    ('\u{002d}', "hyphen"),
    ('\u{002e}', "period"),
    ('\u{002f}', "slash"),
    ('\u{0030}', "zero"),
    ('\u{0031}', "one"),
    ('\u{0032}', "two"),
    ('\u{0033}', "three"),
    ('\u{0034}', "four"),
    ('\u{0035}', "five"),
    ('\u{0036}', "six"),
    ('\u{0037}', "seven"),
    ('\u{0038}', "eight"),
    ('\u{0039}', "nine"),
    ('\u{003a}', "colon"),
    ('\u{003b}', "semicolon"),
    ('\u{003c}', "less"),
    ('\u{003d}', "equal"),
    ('\u{003e}', "greater"),
    ('\u{003f}', "question"),
    ('\u{0040}', "at"),
    ('\u{0041}', "A"),
    ('\u{0042}', "B"),
    ('\u{0043}', "C"),
    ('\u{0044}', "D"),
    ('\u{0045}', "E"),
    ('\u{0046}', "F"),
    ('\u{0047}', "G"),
    ('\u{0048}', "H"),
    ('\u{0049}', "I"),
    ('\u{004a}', "J"),
    ('\u{004b}', "K"),
    ('\u{004c}', "L"),
    ('\u{004d}', "M"),
    ('\u{004e}', "N"),
    ('\u{004f}', "O"),
    ('\u{0050}', "P"),
    ('\u{0051}', "Q"),
    ('\u{0052}', "R"),
    ('\u{0053}', "S"),
    ('\u{0054}', "T"),
    ('\u{0055}', "U"),
    ('\u{0056}', "V"),
    ('\u{0057}', "W"),
    ('\u{0058}', "X"),
    ('\u{0059}', "Y"),
    ('\u{005a}', "Z"),
    ('\u{005b}', "bracketleft"),
    ('\u{005c}', "backslash"),
    ('\u{005d}', "bracketright"),
    ('\u{005e}', "asciicircum"),
    ('\u{005f}', "underscore"),
    ('\u{0060}', "grave"),
    ('\u{0061}', "a"),
    ('\u{0062}', "b"),
    ('\u{0063}', "c"),
    ('\u{0064}', "d"),
    ('\u{0065}', "e"),
    ('\u{0066}', "f"),
    ('\u{0067}', "g"),
    ('\u{0068}', "h"),
    ('\u{0069}', "i"),
    ('\u{006a}', "j"),
    ('\u{006b}', "k"),
    ('\u{006c}', "l"),
    ('\u{006d}', "m"),
    ('\u{006e}', "n"),
    ('\u{006f}', "o"),
    ('\u{0070}', "p"),
    ('\u{0071}', "q"),
    ('\u{0072}', "r"),
    ('\u{0073}', "s"),
    ('\u{0074}', "t"),
    ('\u{0075}', "u"),
    ('\u{0076}', "v"),
    ('\u{0077}', "w"),
    ('\u{0078}', "x"),
    ('\u{0079}', "y"),
    ('\u{007a}', "z"),
    ('\u{007b}', "braceleft"),
    ('\u{007c}', "bar"),
    ('\u{007d}', "braceright"),
    ('\u{007e}', "asciitilde"),
    ('\u{007f}', "controlDEL"),
    ('\u{00a0}', "nbspace"),
    ('\u{00a1}', "exclamdown"),
    ('\u{00a2}', "cent"),
    ('\u{00a3}', "sterling"),
    ('\u{00a4}', "currency"),
    ('\u{00a5}', "yen"),
    ('\u{00a6}', "brokenbar"),
    ('\u{00a7}', "section"),
    ('\u{00a8}', "dieresis"),
    ('\u{00a9}', "copyright"),
    ('\u{00aa}', "ordfeminine"),
    ('\u{00ab}', "guillemotleft"),
    ('\u{00ac}', "logicalnot"),
    ('\u{00ad}', "sfthyphen"),
    ('\u{00ae}', "registered"),
    ('\u{00af}', "macron"),
    ('\u{00b0}', "degree"),
    ('\u{00b1}', "plusminus"),
    ('\u{00b2}', "twosuperior"),
    ('\u{00b3}', "threesuperior"),
    ('\u{00b4}', "acute"),
    ('\u{00b5}', "mu"),
    ('\u{00b6}', "paragraph"),
    ('\u{00b7}', "middot"),
    ('\u{00b8}', "cedilla"),
    ('\u{00b9}', "onesuperior"),
    ('\u{00ba}', "ordmasculine"),
    ('\u{00bb}', "guillemotright"),
    ('\u{00bc}', "onequarter"),
    ('\u{00bd}', "onehalf"),
    ('\u{00be}', "threequarters"),
    ('\u{00bf}', "questiondown"),
    ('\u{00c0}', "Agrave"),
    ('\u{00c1}', "Aacute"),
    ('\u{00c2}', "Acircumflex"),
    ('\u{00c3}', "Atilde"),
    ('\u{00c4}', "Adieresis"),
    ('\u{00c5}', "Aring"),
    ('\u{00c6}', "AE"),
    ('\u{00c7}', "Ccedilla"),
    ('\u{00c8}', "Egrave"),
    ('\u{00c9}', "Eacute"),
    ('\u{00ca}', "Ecircumflex"),
    ('\u{00cb}', "Edieresis"),
    ('\u{00cc}', "Igrave"),
    ('\u{00cd}', "Iacute"),
    ('\u{00ce}', "Icircumflex"),
    ('\u{00cf}', "Idieresis"),
    ('\u{00d0}', "Eth"),
    ('\u{00d1}', "Ntilde"),
    ('\u{00d2}', "Ograve"),
    ('\u{00d3}', "Oacute"),
    ('\u{00d4}', "Ocircumflex"),
    ('\u{00d5}', "Otilde"),
    ('\u{00d6}', "Odieresis"),
    ('\u{00d7}', "multiply"),
    ('\u{00d8}', "Oslash"),
    ('\u{00d9}', "Ugrave"),
    ('\u{00da}', "Uacute"),
    ('\u{00db}', "Ucircumflex"),
    ('\u{00dc}', "Udieresis"),
    ('\u{00dd}', "Yacute"),
    ('\u{00de}', "Thorn"),
    ('\u{00df}', "germandbls"),
    ('\u{00e0}', "agrave"),
    ('\u{00e1}', "aacute"),
    ('\u{00e2}', "acircumflex"),
    ('\u{00e3}', "atilde"),
    ('\u{00e4}', "adieresis"),
    ('\u{00e5}', "aring"),
    ('\u{00e6}', "ae"),
    ('\u{00e7}', "ccedilla"),
    ('\u{00e8}', "egrave"),
    ('\u{00e9}', "eacute"),
    ('\u{00ea}', "ecircumflex"),
    ('\u{00eb}', "edieresis"),
    ('\u{00ec}', "igrave"),
    ('\u{00ed}', "iacute"),
    ('\u{00ee}', "icircumflex"),
    ('\u{00ef}', "idieresis"),
    ('\u{00f0}', "eth"),
    ('\u{00f1}', "ntilde"),
    ('\u{00f2}', "ograve"),
    ('\u{00f3}', "oacute"),
    ('\u{00f4}', "ocircumflex"),
    ('\u{00f5}', "otilde"),
    ('\u{00f6}', "odieresis"),
    ('\u{00f7}', "divide"),
    ('\u{00f8}', "oslash"),
    ('\u{00f9}', "ugrave"),
    ('\u{00fa}', "uacute"),
    ('\u{00fb}', "ucircumflex"),
    ('\u{00fc}', "udieresis"),
    ('\u{00fd}', "yacute"),
    ('\u{00fe}', "thorn"),
    ('\u{00ff}', "ydieresis"),
    ('\u{0100}', "Amacron"),
    ('\u{0101}', "amacron"),
    ('\u{0102}', "Abreve"),
    ('\u{0103}', "abreve"),
    ('\u{0104}', "Aogonek"),
    ('\u{0105}', "aogonek"),
    ('\u{0106}', "Cacute"),
    ('\u{0107}', "cacute"),
    ('\u{0108}', "Ccircumflex"),
    ('\u{0109}', "ccircumflex"),
    ('\u{010a}', "Cdot"),
    ('\u{010b}', "cdot"),
    ('\u{010c}', "Ccaron"),
    ('\u{010d}', "ccaron"),
    ('\u{010e}', "Dcaron"),
    ('\u{010f}', "dcaron"),
    ('\u{0110}', "Dbar"),
    ('\u{0111}', "dbar"),
    ('\u{0112}', "Emacron"),
    ('\u{0113}', "emacron"),
    ('\u{0114}', "Ebreve"),
    ('\u{0115}', "ebreve"),
    ('\u{0116}', "Edot"),
    ('\u{0117}', "edot"),
    ('\u{0118}', "Eogonek"),
    ('\u{0119}', "eogonek"),
    ('\u{011a}', "Ecaron"),
    ('\u{011b}', "ecaron"),
    ('\u{011c}', "Gcircumflex"),
    ('\u{011d}', "gcircumflex"),
    ('\u{011e}', "Gbreve"),
    ('\u{011f}', "gbreve"),
    ('\u{0120}', "Gdot"),
    ('\u{0121}', "gdot"),
    ('\u{0122}', "Gcedilla"),
    ('\u{0123}', "gcedilla"),
    ('\u{0124}', "Hcircumflex"),
    ('\u{0125}', "hcircumflex"),
    ('\u{0126}', "Hbar"),
    ('\u{0127}', "hbar"),
    ('\u{0128}', "Itilde"),
    ('\u{0129}', "itilde"),
    ('\u{012a}', "Imacron"),
    ('\u{012b}', "imacron"),
    ('\u{012c}', "Ibreve"),
    ('\u{012d}', "ibreve"),
    ('\u{012e}', "Iogonek"),
    ('\u{012f}', "iogonek"),
    ('\u{0130}', "Idot"),
    ('\u{0131}', "dotlessi"),
    ('\u{0132}', "IJ"),
    ('\u{0133}', "ij"),
    ('\u{0134}', "Jcircumflex"),
    ('\u{0135}', "jcircumflex"),
    ('\u{0136}', "Kcedilla"),
    ('\u{0137}', "kcedilla"),
    ('\u{0138}', "kgreenlandic"),
    ('\u{0139}', "Lacute"),
    ('\u{013a}', "lacute"),
    ('\u{013b}', "Lcedilla"),
    ('\u{013c}', "lcedilla"),
    ('\u{013d}', "Lcaron"),
    ('\u{013e}', "lcaron"),
    ('\u{013f}', "Ldot"),
    ('\u{0140}', "ldot"),
    ('\u{0141}', "Lslash"),
    ('\u{0142}', "lslash"),
    ('\u{0143}', "Nacute"),
    ('\u{0144}', "nacute"),
    ('\u{0145}', "Ncedilla"),
    ('\u{0146}', "ncedilla"),
    ('\u{0147}', "Ncaron"),
    ('\u{0148}', "ncaron"),
    ('\u{0149}', "napostrophe"),
    ('\u{014a}', "Ng"),
    ('\u{014b}', "ng"),
    ('\u{014c}', "Omacron"),
    ('\u{014d}', "omacron"),
    ('\u{014e}', "Obreve"),
    ('\u{014f}', "obreve"),
    ('\u{0150}', "Odblacute"),
    ('\u{0151}', "odblacute"),
    ('\u{0152}', "OE"),
    ('\u{0153}', "oe"),
    ('\u{0154}', "Racute"),
    ('\u{0155}', "racute"),
    ('\u{0156}', "Rcedilla"),
    ('\u{0157}', "rcedilla"),
    ('\u{0158}', "Rcaron"),
    ('\u{0159}', "rcaron"),
    ('\u{015a}', "Sacute"),
    ('\u{015b}', "sacute"),
    ('\u{015c}', "Scircumflex"),
    ('\u{015d}', "scircumflex"),
    ('\u{015e}', "Scedilla"),
    ('\u{015f}', "scedilla"),
    ('\u{0160}', "Scaron"),
    ('\u{0161}', "scaron"),
    ('\u{0162}', "Tcedilla"),
    ('\u{0163}', "tcedilla"),
    ('\u{0164}', "Tcaron"),
    ('\u{0165}', "tcaron"),
    ('\u{0166}', "Tbar"),
    ('\u{0167}', "tbar"),
    ('\u{0168}', "Utilde"),
    ('\u{0169}', "utilde"),
    ('\u{016a}', "Umacron"),
    ('\u{016b}', "umacron"),
    ('\u{016c}', "Ubreve"),
    ('\u{016d}', "ubreve"),
    ('\u{016e}', "Uring"),
    ('\u{016f}', "uring"),
    ('\u{0170}', "Udblacute"),
    ('\u{0171}', "udblacute"),
    ('\u{0172}', "Uogonek"),
    ('\u{0173}', "uogonek"),
    ('\u{0174}', "Wcircumflex"),
    ('\u{0175}', "wcircumflex"),
    ('\u{0176}', "Ycircumflex"),
    ('\u{0177}', "ycircumflex"),
    ('\u{0178}', "Ydieresis"),
    ('\u{0179}', "Zacute"),
    ('\u{017a}', "zacute"),
    ('\u{017b}', "Zdot"),
    ('\u{017c}', "zdot"),
    ('\u{017d}', "Zcaron"),
    ('\u{017e}', "zcaron"),
    ('\u{017f}', "longs"),
    ('\u{0180}', "bstroke"),
    ('\u{0181}', "Bhook"),
    ('\u{0182}', "Btopbar"),
    ('\u{0183}', "btopbar"),
    ('\u{0184}', "Tonesix"),
    ('\u{0185}', "tonesix"),
    ('\u{0186}', "Oopen"),
    ('\u{0187}', "Chook"),
    ('\u{0188}', "chook"),
    ('\u{0189}', "Dafrican"),
    ('\u{018a}', "Dhook"),
    ('\u{018b}', "Dtopbar"),
    ('\u{018c}', "dtopbar"),
    ('\u{018d}', "deltaturned"),
    ('\u{018e}', "Ereversed"),
    ('\u{018f}', "Schwa"),
    ('\u{0190}', "Eopen"),
    ('\u{0191}', "Fhook"),
    ('\u{0192}', "florin"),
    ('\u{0193}', "Ghook"),
    ('\u{0194}', "Gammaafrican"),
    ('\u{0195}', "hv"),
    ('\u{0196}', "Iotaafrican"),
    ('\u{0197}', "Istroke"),
    ('\u{0198}', "Khook"),
    ('\u{0199}', "khook"),
    ('\u{019a}', "lbar"),
    ('\u{019b}', "lambdastroke"),
    ('\u{019c}', "Mturned"),
    ('\u{019d}', "Nhookleft"),
    ('\u{019e}', "nlegrightlong"),
    ('\u{019f}', "Ocenteredtilde"),
    ('\u{01a0}', "Ohorn"),
    ('\u{01a1}', "ohorn"),
    ('\u{01a2}', "Oi"),
    ('\u{01a3}', "oi"),
    ('\u{01a4}', "Phook"),
    ('\u{01a5}', "phook"),
    ('\u{01a6}', "yr"),
    ('\u{01a7}', "Tonetwo"),
    ('\u{01a8}', "tonetwo"),
    ('\u{01a9}', "Esh"),
    ('\u{01aa}', "eshreversedloop"),
    ('\u{01ab}', "tpalatalhook"),
    ('\u{01ac}', "Thook"),
    ('\u{01ad}', "thook"),
    ('\u{01ae}', "Tretroflexhook"),
    ('\u{01af}', "Uhorn"),
    ('\u{01b0}', "uhorn"),
    ('\u{01b1}', "Upsilonafrican"),
    ('\u{01b2}', "Vhook"),
    ('\u{01b3}', "Yhook"),
    ('\u{01b4}', "yhook"),
    ('\u{01b5}', "Zstroke"),
    ('\u{01b6}', "zstroke"),
    ('\u{01b7}', "Ezh"),
    ('\u{01b8}', "Ezhreversed"),
    ('\u{01b9}', "ezhreversed"),
    ('\u{01ba}', "ezhtail"),
    ('\u{01bb}', "twostroke"),
    ('\u{01bc}', "Tonefive"),
    ('\u{01bd}', "tonefive"),
    ('\u{01be}', "glottalinvertedstroke"),
    ('\u{01bf}', "wynn"),
    ('\u{01c0}', "clickdental"),
    ('\u{01c1}', "clicklateral"),
    ('\u{01c2}', "clickalveolar"),
    ('\u{01c3}', "clickretroflex"),
    ('\u{01c4}', "DZcaron"),
    ('\u{01c5}', "Dzcaron"),
    ('\u{01c6}', "dzcaron"),
    ('\u{01c7}', "LJ"),
    ('\u{01c8}', "Lj"),
    ('\u{01c9}', "lj"),
    ('\u{01ca}', "NJ"),
    ('\u{01cb}', "Nj"),
    ('\u{01cc}', "nj"),
    ('\u{01cd}', "Acaron"),
    ('\u{01ce}', "acaron"),
    ('\u{01cf}', "Icaron"),
    ('\u{01d0}', "icaron"),
    ('\u{01d1}', "Ocaron"),
    ('\u{01d2}', "ocaron"),
    ('\u{01d3}', "Ucaron"),
    ('\u{01d4}', "ucaron"),
    ('\u{01d5}', "Udieresismacron"),
    ('\u{01d6}', "udieresismacron"),
    ('\u{01d7}', "Udieresisacute"),
    ('\u{01d8}', "udieresisacute"),
    ('\u{01d9}', "Udieresiscaron"),
    ('\u{01da}', "udieresiscaron"),
    ('\u{01db}', "Udieresisgrave"),
    ('\u{01dc}', "udieresisgrave"),
    ('\u{01dd}', "eturned"),
    ('\u{01de}', "Adieresismacron"),
    ('\u{01df}', "adieresismacron"),
    ('\u{01e0}', "Adotmacron"),
    ('\u{01e1}', "adotmacron"),
    ('\u{01e2}', "AEmacron"),
    ('\u{01e3}', "aemacron"),
    ('\u{01e4}', "Gstroke"),
    ('\u{01e5}', "gstroke"),
    ('\u{01e6}', "Gcaron"),
    ('\u{01e7}', "gcaron"),
    ('\u{01e8}', "Kcaron"),
    ('\u{01e9}', "kcaron"),
    ('\u{01ea}', "Oogonek"),
    ('\u{01eb}', "oogonek"),
    ('\u{01ec}', "Oogonekmacron"),
    ('\u{01ed}', "oogonekmacron"),
    ('\u{01ee}', "Ezhcaron"),
    ('\u{01ef}', "ezhcaron"),
    ('\u{01f0}', "jcaron"),
    ('\u{01f1}', "DZ"),
    ('\u{01f2}', "Dz"),
    ('\u{01f3}', "dz"),
    ('\u{01f4}', "Gacute"),
    ('\u{01f5}', "gacute"),
    ('\u{01fa}', "Aringacute"),
    ('\u{01fb}', "aringacute"),
    ('\u{01fc}', "AEacute"),
    ('\u{01fd}', "aeacute"),
    ('\u{01fe}', "Oslashacute"),
    ('\u{01ff}', "oslashacute"),
    ('\u{0200}', "Adblgrave"),
    ('\u{0201}', "adblgrave"),
    ('\u{0202}', "Ainvertedbreve"),
    ('\u{0203}', "ainvertedbreve"),
    ('\u{0204}', "Edblgrave"),
    ('\u{0205}', "edblgrave"),
    ('\u{0206}', "Einvertedbreve"),
    ('\u{0207}', "einvertedbreve"),
    ('\u{0208}', "Idblgrave"),
    ('\u{0209}', "idblgrave"),
    ('\u{020a}', "Iinvertedbreve"),
    ('\u{020b}', "iinvertedbreve"),
    ('\u{020c}', "Odblgrave"),
    ('\u{020d}', "odblgrave"),
    ('\u{020e}', "Oinvertedbreve"),
    ('\u{020f}', "oinvertedbreve"),
    ('\u{0210}', "Rdblgrave"),
    ('\u{0211}', "rdblgrave"),
    ('\u{0212}', "Rinvertedbreve"),
    ('\u{0213}', "rinvertedbreve"),
    ('\u{0214}', "Udblgrave"),
    ('\u{0215}', "udblgrave"),
    ('\u{0216}', "Uinvertedbreve"),
    ('\u{0217}', "uinvertedbreve"),
    ('\u{0218}', "Scommaaccent"),
    ('\u{0219}', "scommaaccent"),
    ('\u{0237}', "dotlessj"),
    ('\u{0250}', "aturned"),
    ('\u{0251}', "ascript"),
    ('\u{0252}', "ascriptturned"),
    ('\u{0253}', "bhook"),
    ('\u{0254}', "oopen"),
    ('\u{0255}', "ccurl"),
    ('\u{0256}', "dtail"),
    ('\u{0257}', "dhook"),
    ('\u{0258}', "ereversed"),
    ('\u{0259}', "schwa"),
    ('\u{025a}', "schwahook"),
    ('\u{025b}', "eopen"),
    ('\u{025c}', "eopenreversed"),
    ('\u{025d}', "eopenreversedhook"),
    ('\u{025e}', "eopenreversedclosed"),
    ('\u{025f}', "jdotlessstroke"),
    ('\u{0260}', "ghook"),
    ('\u{0261}', "gscript"),
    ('\u{0263}', "gammalatinsmall"),
    ('\u{0264}', "ramshorn"),
    ('\u{0265}', "hturned"),
    ('\u{0266}', "hhook"),
    ('\u{0267}', "henghook"),
    ('\u{0268}', "istroke"),
    ('\u{0269}', "iotalatin"),
    ('\u{026b}', "lmiddletilde"),
    ('\u{026c}', "lbelt"),
    ('\u{026d}', "lhookretroflex"),
    ('\u{026e}', "lezh"),
    ('\u{026f}', "mturned"),
    ('\u{0270}', "mlonglegturned"),
    ('\u{0271}', "mhook"),
    ('\u{0272}', "nhookleft"),
    ('\u{0273}', "nhookretroflex"),
    ('\u{0275}', "obarred"),
    ('\u{0277}', "omegalatinclosed"),
    ('\u{0278}', "philatin"),
    ('\u{0279}', "rturned"),
    ('\u{027a}', "rlonglegturned"),
    ('\u{027b}', "rhookturned"),
    ('\u{027c}', "rlongleg"),
    ('\u{027d}', "rhook"),
    ('\u{027e}', "rfishhook"),
    ('\u{027f}', "rfishhookreversed"),
    ('\u{0281}', "Rsmallinverted"),
    ('\u{0282}', "shook"),
    ('\u{0283}', "esh"),
    ('\u{0284}', "dotlessjstrokehook"),
    ('\u{0285}', "eshsquatreversed"),
    ('\u{0286}', "eshcurl"),
    ('\u{0287}', "tturned"),
    ('\u{0288}', "tretroflexhook"),
    ('\u{0289}', "ubar"),
    ('\u{028a}', "upsilonlatin"),
    ('\u{028b}', "vhook"),
    ('\u{028c}', "vturned"),
    ('\u{028d}', "wturned"),
    ('\u{028e}', "yturned"),
    ('\u{0290}', "zretroflexhook"),
    ('\u{0291}', "zcurl"),
    ('\u{0292}', "ezh"),
    ('\u{0293}', "ezhcurl"),
    ('\u{0294}', "glottalstop"),
    ('\u{0295}', "glottalstopreversed"),
    ('\u{0296}', "glottalstopinverted"),
    ('\u{0297}', "cstretched"),
    ('\u{0298}', "bilabialclick"),
    ('\u{029a}', "eopenclosed"),
    ('\u{029b}', "Gsmallhook"),
    ('\u{029d}', "jcrossedtail"),
    ('\u{029e}', "kturned"),
    ('\u{02a0}', "qhook"),
    ('\u{02a1}', "glottalstopstroke"),
    ('\u{02a2}', "glottalstopstrokereversed"),
    ('\u{02a3}', "dzaltone"),
    ('\u{02a4}', "dezh"),
    ('\u{02a5}', "dzcurl"),
    ('\u{02a6}', "ts"),
    ('\u{02a7}', "tesh"),
    ('\u{02a8}', "tccurl"),
    ('\u{02b0}', "hsuperior"),
    ('\u{02b1}', "hhooksuperior"),
    ('\u{02b2}', "jsuperior"),
    ('\u{02b4}', "rturnedsuperior"),
    ('\u{02b5}', "rhookturnedsuperior"),
    ('\u{02b6}', "Rsmallinvertedsuperior"),
    ('\u{02b7}', "wsuperior"),
    ('\u{02b8}', "ysuperior"),
    ('\u{02b9}', "primemod"),
    ('\u{02ba}', "dblprimemod"),
    ('\u{02bb}', "commaturnedmod"),
    ('\u{02bc}', "afii57929"),
    ('\u{02bd}', "afii64937"),
    ('\u{02be}', "ringhalfright"),
    ('\u{02bf}', "ringhalfleft"),
    ('\u{02c0}', "glottalstopmod"),
    ('\u{02c1}', "glottalstopreversedmod"),
    ('\u{02c2}', "arrowheadleftmod"),
    ('\u{02c3}', "arrowheadrightmod"),
    ('\u{02c4}', "arrowheadupmod"),
    ('\u{02c5}', "arrowheaddownmod"),
    ('\u{02c6}', "circumflex"),
    ('\u{02c7}', "caron"),
    ('\u{02c8}', "verticallinemod"),
    ('\u{02c9}', "firsttonechinese"),
    ('\u{02ca}', "secondtonechinese"),
    ('\u{02cb}', "fourthtonechinese"),
    ('\u{02cc}', "verticallinelowmod"),
    ('\u{02cd}', "macronlowmod"),
    ('\u{02ce}', "gravelowmod"),
    ('\u{02cf}', "acutelowmod"),
    ('\u{02d0}', "colontriangularmod"),
    ('\u{02d1}', "colontriangularhalfmod"),
    ('\u{02d2}', "ringhalfrightcentered"),
    ('\u{02d3}', "ringhalfleftcentered"),
    ('\u{02d4}', "uptackmod"),
    ('\u{02d5}', "downtackmod"),
    ('\u{02d6}', "plusmod"),
    ('\u{02d7}', "minusmod"),
    ('\u{02d8}', "breve"),
    ('\u{02d9}', "dotaccent"),
    ('\u{02da}', "ring"),
    ('\u{02db}', "ogonek"),
    ('\u{02dc}', "ilde"),
    ('\u{02dd}', "hungarumlaut"),
    ('\u{02de}', "rhotichookmod"),
    ('\u{02e0}', "gammasuperior"),
    ('\u{02e3}', "xsuperior"),
    ('\u{02e4}', "glottalstopreversedsuperior"),
    ('\u{02e5}', "tonebarextrahighmod"),
    ('\u{02e6}', "tonebarhighmod"),
    ('\u{02e7}', "tonebarmidmod"),
    ('\u{02e8}', "tonebarlowmod"),
    ('\u{02e9}', "tonebarextralowmod"),
    ('\u{0300}', "gravecmb"),
    ('\u{0301}', "acutecmb"),
    ('\u{0302}', "hatwide"),
    ('\u{0303}', "tildecmb"),
    ('\u{0304}', "macroncmb"),
    ('\u{0305}', "overlinecmb"),
    ('\u{0306}', "brevecmb"),
    ('\u{0307}', "dotaccentcmb"),
    ('\u{0308}', "dieresiscmb"),
    ('\u{0309}', "hookcmb"),
    ('\u{030a}', "ringcmb"),
    ('\u{030b}', "hungarumlautcmb"),
    ('\u{030c}', "caroncmb"),
    ('\u{030d}', "verticallineabovecmb"),
    ('\u{030e}', "dblverticallineabovecmb"),
    ('\u{030f}', "dblgravecmb"),
    ('\u{0310}', "candrabinducmb"),
    ('\u{0311}', "breveinvertedcmb"),
    ('\u{0312}', "commaturnedabovecmb"),
    ('\u{0313}', "commaabovecmb"),
    ('\u{0314}', "commareversedabovecmb"),
    ('\u{0315}', "commaaboverightcmb"),
    ('\u{0316}', "gravebelowcmb"),
    ('\u{0317}', "acutebelowcmb"),
    ('\u{0318}', "lefttackbelowcmb"),
    ('\u{0319}', "righttackbelowcmb"),
    ('\u{031a}', "leftangleabovecmb"),
    ('\u{031b}', "horncmb"),
    ('\u{031c}', "ringhalfleftbelowcmb"),
    ('\u{031d}', "uptackbelowcmb"),
    ('\u{031e}', "downtackbelowcmb"),
    ('\u{031f}', "plusbelowcmb"),
    ('\u{0320}', "minusbelowcmb"),
    ('\u{0321}', "hookpalatalizedbelowcmb"),
    ('\u{0322}', "hookretroflexbelowcmb"),
    ('\u{0323}', "dotbelowcmb"),
    ('\u{0324}', "dieresisbelowcmb"),
    ('\u{0325}', "ringbelowcmb"),
    ('\u{0327}', "cedillacmb"),
    ('\u{0328}', "ogonekcmb"),
    ('\u{0329}', "verticallinebelowcmb"),
    ('\u{032a}', "bridgebelowcmb"),
    ('\u{032b}', "dblarchinvertedbelowcmb"),
    ('\u{032c}', "caronbelowcmb"),
    ('\u{032d}', "circumflexbelowcmb"),
    ('\u{032e}', "brevebelowcmb"),
    ('\u{032f}', "breveinvertedbelowcmb"),
    ('\u{0330}', "tildebelowcmb"),
    ('\u{0331}', "macronbelowcmb"),
    ('\u{0332}', "lowlinecmb"),
    ('\u{0333}', "dbllowlinecmb"),
    ('\u{0334}', "tildeoverlaycmb"),
    ('\u{0335}', "strokeshortoverlaycmb"),
    ('\u{0336}', "strokelongoverlaycmb"),
    ('\u{0337}', "solidusshortoverlaycmb"),
    ('\u{0338}', "negationslash"),
    ('\u{0339}', "ringhalfrightbelowcmb"),
    ('\u{033a}', "bridgeinvertedbelowcmb"),
    ('\u{033b}', "squarebelowcmb"),
    ('\u{033c}', "seagullbelowcmb"),
    ('\u{033d}', "xabovecmb"),
    ('\u{033e}', "tildeverticalcmb"),
    ('\u{033f}', "dbloverlinecmb"),
    ('\u{0340}', "gravetonecmb"),
    ('\u{0341}', "acutetonecmb"),
    ('\u{0342}', "perispomenigreekcmb"),
    ('\u{0343}', "koroniscmb"),
    ('\u{0344}', "dialytikatonoscmb"),
    ('\u{0345}', "ypogegrammenigreekcmb"),
    ('\u{0360}', "tildedoublecmb"),
    ('\u{0361}', "breveinverteddoublecmb"),
    ('\u{0374}', "numeralsigngreek"),
    ('\u{0375}', "numeralsignlowergreek"),
    ('\u{037a}', "ypogegrammeni"),
    ('\u{037e}', "questiongreek"),
    ('\u{0384}', "tonos"),
    ('\u{0385}', "dieresistonos"),
    ('\u{0386}', "Alphatonos"),
    ('\u{0387}', "anoteleia"),
    ('\u{0388}', "Epsilontonos"),
    ('\u{0389}', "Etatonos"),
    ('\u{038a}', "Iotatonos"),
    ('\u{038c}', "Omicrontonos"),
    ('\u{038e}', "Upsilontonos"),
    ('\u{038f}', "Omegatonos"),
    ('\u{0390}', "iotadieresistonos"),
    ('\u{0391}', "Alpha"),
    ('\u{0392}', "Beta"),
    ('\u{0393}', "Gamma"),
    ('\u{0394}', "Deltagreek"),
    ('\u{0395}', "Epsilon"),
    ('\u{0396}', "Zeta"),
    ('\u{0397}', "Eta"),
    ('\u{0398}', "Theta"),
    ('\u{0399}', "Iota"),
    ('\u{039a}', "Kappa"),
    ('\u{039b}', "Lambda"),
    ('\u{039c}', "Mu"),
    ('\u{039d}', "Nu"),
    ('\u{039e}', "Xi"),
    ('\u{039f}', "Omicron"),
    ('\u{03a0}', "Pi"),
    ('\u{03a1}', "Rho"),
    ('\u{03a3}', "Sigma"),
    ('\u{03a4}', "Tau"),
    ('\u{03a5}', "Upsilon"),
    ('\u{03a6}', "Phi"),
    ('\u{03a7}', "Chi"),
    ('\u{03a8}', "Psi"),
    ('\u{03a9}', "Omegagreek"),
    ('\u{03aa}', "Iotadieresis"),
    ('\u{03ab}', "Upsilondieresis"),
    ('\u{03ac}', "alphatonos"),
    ('\u{03ad}', "epsilontonos"),
    ('\u{03ae}', "etatonos"),
    ('\u{03af}', "iotatonos"),
    ('\u{03b0}', "upsilondieresistonos"),
    ('\u{03b1}', "alpha"),
    ('\u{03b2}', "beta"),
    ('\u{03b3}', "gamma"),
    ('\u{03b4}', "delta"),
    ('\u{03b5}', "epsilon"),
    ('\u{03b6}', "zeta"),
    ('\u{03b7}', "eta"),
    ('\u{03b8}', "theta"),
    ('\u{03b9}', "iota"),
    ('\u{03ba}', "kappa"),
    ('\u{03bb}', "lambda"),
    ('\u{03bc}', "mugreek"),
    ('\u{03bd}', "nu"),
    ('\u{03be}', "xi"),
    ('\u{03bf}', "omicron"),
    ('\u{03c0}', "pi"),
    ('\u{03c1}', "rho"),
    ('\u{03c2}', "sigma1"),
    ('\u{03c3}', "sigma"),
    ('\u{03c4}', "tau"),
    ('\u{03c5}', "upsilon"),
    ('\u{03c6}', "phi"),
    ('\u{03c7}', "chi"),
    ('\u{03c8}', "psi"),
    ('\u{03c9}', "omega"),
    ('\u{03ca}', "iotadieresis"),
    ('\u{03cb}', "upsilondieresis"),
    ('\u{03cc}', "omicrontonos"),
    ('\u{03cd}', "upsilontonos"),
    ('\u{03ce}', "omegatonos"),
    ('\u{03d0}', "betasymbolgreek"),
    ('\u{03d1}', "theta1"),
    ('\u{03d2}', "Upsilon1"),
    ('\u{03d3}', "Upsilonacutehooksymbolgreek"),
    ('\u{03d4}', "Upsilondieresishooksymbolgreek"),
    ('\u{03d5}', "phi2"),
    ('\u{03d6}', "pi1"),
    ('\u{03da}', "Stigmagreek"),
    ('\u{03dc}', "Digammagreek"),
    ('\u{03de}', "Koppagreek"),
    ('\u{03e0}', "Sampigreek"),
    ('\u{03e2}', "Sheicoptic"),
    ('\u{03e3}', "sheicoptic"),
    ('\u{03e4}', "Feicoptic"),
    ('\u{03e5}', "feicoptic"),
    ('\u{03e6}', "Kheicoptic"),
    ('\u{03e7}', "kheicoptic"),
    ('\u{03e8}', "Horicoptic"),
    ('\u{03e9}', "horicoptic"),
    ('\u{03ea}', "Gangiacoptic"),
    ('\u{03eb}', "gangiacoptic"),
    ('\u{03ec}', "Shimacoptic"),
    ('\u{03ed}', "shimacoptic"),
    ('\u{03ee}', "Deicoptic"),
    ('\u{03ef}', "deicoptic"),
    ('\u{03f0}', "kappasymbolgreek"),
    ('\u{03f1}', "rho1"),
    ('\u{03f2}', "sigmalunatesymbolgreek"),
    ('\u{03f3}', "yotgreek"),
    ('\u{03f5}', "epsilon1"),
    ('\u{0401}', "afii10023"),
    ('\u{0402}', "afii10051"),
    ('\u{0403}', "afii10052"),
    ('\u{0404}', "Ecyrillic"),
    ('\u{0405}', "afii10054"),
    ('\u{0406}', "Icyrillic"),
    ('\u{0407}', "afii10056"),
    ('\u{0408}', "afii10057"),
    ('\u{0409}', "afii10058"),
    ('\u{040a}', "afii10059"),
    ('\u{040b}', "afii10060"),
    ('\u{040c}', "afii10061"),
    ('\u{040e}', "afii10062"),
    ('\u{040f}', "afii10145"),
    ('\u{0410}', "Acyrillic"),
    ('\u{0411}', "afii10018"),
    ('\u{0412}', "afii10019"),
    ('\u{0413}', "afii10020"),
    ('\u{0414}', "afii10021"),
    ('\u{0415}', "afii10022"),
    ('\u{0416}', "afii10024"),
    ('\u{0417}', "afii10025"),
    ('\u{0418}', "afii10026"),
    ('\u{0419}', "afii10027"),
    ('\u{041a}', "afii10028"),
    ('\u{041b}', "afii10029"),
    ('\u{041c}', "afii10030"),
    ('\u{041d}', "afii10031"),
    ('\u{041e}', "Ocyrillic"),
    ('\u{041f}', "afii10033"),
    ('\u{0420}', "afii10034"),
    ('\u{0421}', "afii10035"),
    ('\u{0422}', "afii10036"),
    ('\u{0423}', "Ucyrillic"),
    ('\u{0424}', "afii10038"),
    ('\u{0425}', "afii10039"),
    ('\u{0426}', "afii10040"),
    ('\u{0427}', "afii10041"),
    ('\u{0428}', "afii10042"),
    ('\u{0429}', "afii10043"),
    ('\u{042a}', "afii10044"),
    ('\u{042b}', "afii10045"),
    ('\u{042c}', "afii10046"),
    ('\u{042d}', "afii10047"),
    ('\u{042e}', "afii10048"),
    ('\u{042f}', "afii10049"),
    ('\u{0430}', "acyrillic"),
    ('\u{0431}', "afii10066"),
    ('\u{0432}', "afii10067"),
    ('\u{0433}', "afii10068"),
    ('\u{0434}', "afii10069"),
    ('\u{0435}', "afii10070"),
    ('\u{0436}', "afii10072"),
    ('\u{0437}', "afii10073"),
    ('\u{0438}', "afii10074"),
    ('\u{0439}', "afii10075"),
    ('\u{043a}', "afii10076"),
    ('\u{043b}', "afii10077"),
    ('\u{043c}', "afii10078"),
    ('\u{043d}', "afii10079"),
    ('\u{043e}', "afii10080"),
    ('\u{043f}', "afii10081"),
    ('\u{0440}', "afii10082"),
    ('\u{0441}', "afii10083"),
    ('\u{0442}', "afii10084"),
    ('\u{0443}', "afii10085"),
    ('\u{0444}', "afii10086"),
    ('\u{0445}', "afii10087"),
    ('\u{0446}', "afii10088"),
    ('\u{0447}', "afii10089"),
    ('\u{0448}', "afii10090"),
    ('\u{0449}', "afii10091"),
    ('\u{044a}', "afii10092"),
    ('\u{044b}', "afii10093"),
    ('\u{044c}', "afii10094"),
    ('\u{044d}', "afii10095"),
    ('\u{044e}', "afii10096"),
    ('\u{044f}', "afii10097"),
    ('\u{0451}', "afii10071"),
    ('\u{0452}', "afii10099"),
    ('\u{0453}', "afii10100"),
    ('\u{0454}', "afii10101"),
    ('\u{0455}', "afii10102"),
    ('\u{0456}', "afii10103"),
    ('\u{0457}', "afii10104"),
    ('\u{0458}', "afii10105"),
    ('\u{0459}', "afii10106"),
    ('\u{045a}', "afii10107"),
    ('\u{045b}', "afii10108"),
    ('\u{045c}', "afii10109"),
    ('\u{045e}', "afii10110"),
    ('\u{045f}', "afii10193"),
    ('\u{0460}', "Omegacyrillic"),
    ('\u{0461}', "omegacyrillic"),
    ('\u{0462}', "afii10146"),
    ('\u{0463}', "afii10194"),
    ('\u{0464}', "Eiotifiedcyrillic"),
    ('\u{0465}', "eiotifiedcyrillic"),
    ('\u{0466}', "Yuslittlecyrillic"),
    ('\u{0467}', "yuslittlecyrillic"),
    ('\u{0468}', "Yuslittleiotifiedcyrillic"),
    ('\u{0469}', "yuslittleiotifiedcyrillic"),
    ('\u{046a}', "Yusbigcyrillic"),
    ('\u{046b}', "yusbigcyrillic"),
    ('\u{046c}', "Yusbigiotifiedcyrillic"),
    ('\u{046d}', "yusbigiotifiedcyrillic"),
    ('\u{046e}', "Ksicyrillic"),
    ('\u{046f}', "ksicyrillic"),
    ('\u{0470}', "Psicyrillic"),
    ('\u{0471}', "psicyrillic"),
    ('\u{0472}', "afii10147"),
    ('\u{0473}', "afii10195"),
    ('\u{0474}', "afii10148"),
    ('\u{0475}', "afii10196"),
    ('\u{0476}', "Izhitsadblgravecyrillic"),
    ('\u{0477}', "izhitsadblgravecyrillic"),
    ('\u{0478}', "Ukcyrillic"),
    ('\u{0479}', "ukcyrillic"),
    ('\u{047a}', "Omegaroundcyrillic"),
    ('\u{047b}', "omegaroundcyrillic"),
    ('\u{047c}', "Omegatitlocyrillic"),
    ('\u{047d}', "omegatitlocyrillic"),
    ('\u{047e}', "Otcyrillic"),
    ('\u{047f}', "otcyrillic"),
    ('\u{0480}', "Koppacyrillic"),
    ('\u{0481}', "koppacyrillic"),
    ('\u{0482}', "thousandcyrillic"),
    ('\u{0483}', "titlocyrilliccmb"),
    ('\u{0484}', "palatalizationcyrilliccmb"),
    ('\u{0485}', "dasiapneumatacyrilliccmb"),
    ('\u{0486}', "psilipneumatacyrilliccmb"),
    ('\u{0490}', "afii10050"),
    ('\u{0491}', "afii10098"),
    ('\u{0492}', "Ghestrokecyrillic"),
    ('\u{0493}', "ghestrokecyrillic"),
    ('\u{0494}', "Ghemiddlehookcyrillic"),
    ('\u{0495}', "ghemiddlehookcyrillic"),
    ('\u{0496}', "Zhedescendercyrillic"),
    ('\u{0497}', "zhedescendercyrillic"),
    ('\u{0498}', "Zedescendercyrillic"),
    ('\u{0499}', "zedescendercyrillic"),
    ('\u{049a}', "Kadescendercyrillic"),
    ('\u{049b}', "kadescendercyrillic"),
    ('\u{049c}', "Kaverticalstrokecyrillic"),
    ('\u{049d}', "kaverticalstrokecyrillic"),
    ('\u{049e}', "Kastrokecyrillic"),
    ('\u{049f}', "kastrokecyrillic"),
    ('\u{04a0}', "Kabashkircyrillic"),
    ('\u{04a1}', "kabashkircyrillic"),
    ('\u{04a2}', "Endescendercyrillic"),
    ('\u{04a3}', "endescendercyrillic"),
    ('\u{04a4}', "Enghecyrillic"),
    ('\u{04a5}', "enghecyrillic"),
    ('\u{04a6}', "Pemiddlehookcyrillic"),
    ('\u{04a7}', "pemiddlehookcyrillic"),
    ('\u{04a8}', "Haabkhasiancyrillic"),
    ('\u{04a9}', "haabkhasiancyrillic"),
    ('\u{04aa}', "Esdescendercyrillic"),
    ('\u{04ab}', "esdescendercyrillic"),
    ('\u{04ac}', "Tedescendercyrillic"),
    ('\u{04ad}', "tedescendercyrillic"),
    ('\u{04ae}', "Ustraightcyrillic"),
    ('\u{04af}', "ustraightcyrillic"),
    ('\u{04b0}', "Ustraightstrokecyrillic"),
    ('\u{04b1}', "ustraightstrokecyrillic"),
    ('\u{04b2}', "Hadescendercyrillic"),
    ('\u{04b3}', "hadescendercyrillic"),
    ('\u{04b4}', "Tetsecyrillic"),
    ('\u{04b5}', "tetsecyrillic"),
    ('\u{04b6}', "Chedescendercyrillic"),
    ('\u{04b7}', "chedescendercyrillic"),
    ('\u{04b8}', "Cheverticalstrokecyrillic"),
    ('\u{04b9}', "cheverticalstrokecyrillic"),
    ('\u{04ba}', "Shhacyrillic"),
    ('\u{04bb}', "shhacyrillic"),
    ('\u{04bc}', "Cheabkhasiancyrillic"),
    ('\u{04bd}', "cheabkhasiancyrillic"),
    ('\u{04be}', "Chedescenderabkhasiancyrillic"),
    ('\u{04bf}', "chedescenderabkhasiancyrillic"),
    ('\u{04c0}', "palochkacyrillic"),
    ('\u{04c1}', "Zhebrevecyrillic"),
    ('\u{04c2}', "zhebrevecyrillic"),
    ('\u{04c3}', "Kahookcyrillic"),
    ('\u{04c4}', "kahookcyrillic"),
    ('\u{04c7}', "Enhookcyrillic"),
    ('\u{04c8}', "enhookcyrillic"),
    ('\u{04cb}', "Chekhakassiancyrillic"),
    ('\u{04cc}', "chekhakassiancyrillic"),
    ('\u{04d0}', "Abrevecyrillic"),
    ('\u{04d1}', "abrevecyrillic"),
    ('\u{04d2}', "Adieresiscyrillic"),
    ('\u{04d3}', "adieresiscyrillic"),
    ('\u{04d4}', "Aiecyrillic"),
    ('\u{04d5}', "aiecyrillic"),
    ('\u{04d6}', "Iebrevecyrillic"),
    ('\u{04d7}', "iebrevecyrillic"),
    ('\u{04d8}', "Schwacyrillic"),
    ('\u{04d9}', "afii10846"),
    ('\u{04da}', "Schwadieresiscyrillic"),
    ('\u{04db}', "schwadieresiscyrillic"),
    ('\u{04dc}', "Zhedieresiscyrillic"),
    ('\u{04dd}', "zhedieresiscyrillic"),
    ('\u{04de}', "Zedieresiscyrillic"),
    ('\u{04df}', "zedieresiscyrillic"),
    ('\u{04e0}', "Dzeabkhasiancyrillic"),
    ('\u{04e1}', "dzeabkhasiancyrillic"),
    ('\u{04e2}', "Imacroncyrillic"),
    ('\u{04e3}', "imacroncyrillic"),
    ('\u{04e4}', "Idieresiscyrillic"),
    ('\u{04e5}', "idieresiscyrillic"),
    ('\u{04e6}', "Odieresiscyrillic"),
    ('\u{04e7}', "odieresiscyrillic"),
    ('\u{04e8}', "Obarredcyrillic"),
    ('\u{04e9}', "obarredcyrillic"),
    ('\u{04ea}', "Obarreddieresiscyrillic"),
    ('\u{04eb}', "obarreddieresiscyrillic"),
    ('\u{04ee}', "Umacroncyrillic"),
    ('\u{04ef}', "umacroncyrillic"),
    ('\u{04f0}', "Udieresiscyrillic"),
    ('\u{04f1}', "udieresiscyrillic"),
    ('\u{04f2}', "Uhungarumlautcyrillic"),
    ('\u{04f3}', "uhungarumlautcyrillic"),
    ('\u{04f4}', "Chedieresiscyrillic"),
    ('\u{04f5}', "chedieresiscyrillic"),
    ('\u{04f8}', "Yerudieresiscyrillic"),
    ('\u{04f9}', "yerudieresiscyrillic"),
    ('\u{0531}', "Aybarmenian"),
    ('\u{0532}', "Benarmenian"),
    ('\u{0533}', "Gimarmenian"),
    ('\u{0534}', "Daarmenian"),
    ('\u{0535}', "Echarmenian"),
    ('\u{0536}', "Zaarmenian"),
    ('\u{0537}', "Eharmenian"),
    ('\u{0538}', "Etarmenian"),
    ('\u{0539}', "Toarmenian"),
    ('\u{053a}', "Zhearmenian"),
    ('\u{053b}', "Iniarmenian"),
    ('\u{053c}', "Liwnarmenian"),
    ('\u{053d}', "Xeharmenian"),
    ('\u{053e}', "Caarmenian"),
    ('\u{053f}', "Kenarmenian"),
    ('\u{0540}', "Hoarmenian"),
    ('\u{0541}', "Jaarmenian"),
    ('\u{0542}', "Ghadarmenian"),
    ('\u{0543}', "Cheharmenian"),
    ('\u{0544}', "Menarmenian"),
    ('\u{0545}', "Yiarmenian"),
    ('\u{0546}', "Nowarmenian"),
    ('\u{0547}', "Shaarmenian"),
    ('\u{0548}', "Voarmenian"),
    ('\u{0549}', "Chaarmenian"),
    ('\u{054a}', "Peharmenian"),
    ('\u{054b}', "Jheharmenian"),
    ('\u{054c}', "Raarmenian"),
    ('\u{054d}', "Seharmenian"),
    ('\u{054e}', "Vewarmenian"),
    ('\u{054f}', "Tiwnarmenian"),
    ('\u{0550}', "Reharmenian"),
    ('\u{0551}', "Coarmenian"),
    ('\u{0552}', "Yiwnarmenian"),
    ('\u{0553}', "Piwrarmenian"),
    ('\u{0554}', "Keharmenian"),
    ('\u{0555}', "Oharmenian"),
    ('\u{0556}', "Feharmenian"),
    ('\u{0559}', "ringhalfleftarmenian"),
    ('\u{055a}', "apostrophearmenian"),
    ('\u{055b}', "emphasismarkarmenian"),
    ('\u{055c}', "exclamarmenian"),
    ('\u{055d}', "commaarmenian"),
    ('\u{055e}', "questionarmenian"),
    ('\u{055f}', "abbreviationmarkarmenian"),
    ('\u{0561}', "aybarmenian"),
    ('\u{0562}', "benarmenian"),
    ('\u{0563}', "gimarmenian"),
    ('\u{0564}', "daarmenian"),
    ('\u{0565}', "echarmenian"),
    ('\u{0566}', "zaarmenian"),
    ('\u{0567}', "eharmenian"),
    ('\u{0568}', "etarmenian"),
    ('\u{0569}', "toarmenian"),
    ('\u{056a}', "zhearmenian"),
    ('\u{056b}', "iniarmenian"),
    ('\u{056c}', "liwnarmenian"),
    ('\u{056d}', "xeharmenian"),
    ('\u{056e}', "caarmenian"),
    ('\u{056f}', "kenarmenian"),
    ('\u{0570}', "hoarmenian"),
    ('\u{0571}', "jaarmenian"),
    ('\u{0572}', "ghadarmenian"),
    ('\u{0573}', "cheharmenian"),
    ('\u{0574}', "menarmenian"),
    ('\u{0575}', "yiarmenian"),
    ('\u{0576}', "nowarmenian"),
    ('\u{0577}', "shaarmenian"),
    ('\u{0578}', "voarmenian"),
    ('\u{0579}', "chaarmenian"),
    ('\u{057a}', "peharmenian"),
    ('\u{057b}', "jheharmenian"),
    ('\u{057c}', "raarmenian"),
    ('\u{057d}', "seharmenian"),
    ('\u{057e}', "vewarmenian"),
    ('\u{057f}', "tiwnarmenian"),
    ('\u{0580}', "reharmenian"),
    ('\u{0581}', "coarmenian"),
    ('\u{0582}', "yiwnarmenian"),
    ('\u{0583}', "piwrarmenian"),
    ('\u{0584}', "keharmenian"),
    ('\u{0585}', "oharmenian"),
    ('\u{0586}', "feharmenian"),
    ('\u{0587}', "echyiwnarmenian"),
    ('\u{0589}', "periodarmenian"),
    ('\u{0591}', "etnahtahebrew"),
    ('\u{0592}', "segoltahebrew"),
    ('\u{0593}', "shalshelethebrew"),
    ('\u{0594}', "zaqefqatanhebrew"),
    ('\u{0595}', "zaqefgadolhebrew"),
    ('\u{0596}', "tipehahebrew"),
    ('\u{0597}', "reviahebrew"),
    ('\u{0598}', "zarqahebrew"),
    ('\u{0599}', "pashtahebrew"),
    ('\u{059a}', "yetivhebrew"),
    ('\u{059b}', "tevirhebrew"),
    ('\u{059c}', "gereshaccenthebrew"),
    ('\u{059d}', "gereshmuqdamhebrew"),
    ('\u{059e}', "gershayimaccenthebrew"),
    ('\u{059f}', "qarneyparahebrew"),
    ('\u{05a0}', "telishagedolahebrew"),
    ('\u{05a1}', "pazerhebrew"),
    ('\u{05a3}', "munahhebrew"),
    ('\u{05a4}', "mahapakhhebrew"),
    ('\u{05a5}', "merkhahebrew"),
    ('\u{05a6}', "merkhakefulahebrew"),
    ('\u{05a7}', "dargahebrew"),
    ('\u{05a8}', "qadmahebrew"),
    ('\u{05a9}', "telishaqetanahebrew"),
    ('\u{05aa}', "yerahbenyomohebrew"),
    ('\u{05ab}', "olehebrew"),
    ('\u{05ac}', "iluyhebrew"),
    ('\u{05ad}', "dehihebrew"),
    ('\u{05ae}', "zinorhebrew"),
    ('\u{05af}', "masoracirclehebrew"),
    ('\u{05b0}', "sheva"),
    ('\u{05b1}', "afii57801"),
    ('\u{05b2}', "afii57800"),
    ('\u{05b3}', "afii57802"),
    ('\u{05b4}', "hiriq"),
    ('\u{05b5}', "tsere"),
    ('\u{05b6}', "segol"),
    ('\u{05b7}', "patah"),
    ('\u{05b8}', "qamats"),
    ('\u{05b9}', "holam"),
    ('\u{05bb}', "qubuts"),
    ('\u{05bc}', "dagesh"),
    ('\u{05bd}', "afii57839"),
    ('\u{05be}', "afii57645"),
    ('\u{05bf}', "rafe"),
    ('\u{05c0}', "afii57842"),
    ('\u{05c1}', "afii57804"),
    ('\u{05c2}', "afii57803"),
    ('\u{05c3}', "afii57658"),
    ('\u{05c4}', "upperdothebrew"),
    ('\u{05d0}', "alef"),
    ('\u{05d1}', "bet"),
    ('\u{05d2}', "gimel"),
    ('\u{05d3}', "dalet"),
    ('\u{05d4}', "he"),
    ('\u{05d5}', "vav"),
    ('\u{05d6}', "zayin"),
    ('\u{05d7}', "het"),
    ('\u{05d8}', "tet"),
    ('\u{05d9}', "yod"),
    ('\u{05da}', "finalkaf"),
    ('\u{05db}', "kaf"),
    ('\u{05dc}', "lamed"),
    ('\u{05dd}', "finalmem"),
    ('\u{05de}', "mem"),
    ('\u{05df}', "finalnun"),
    ('\u{05e0}', "nun"),
    ('\u{05e1}', "samekh"),
    ('\u{05e2}', "ayin"),
    ('\u{05e3}', "finalpe"),
    ('\u{05e4}', "pe"),
    ('\u{05e5}', "afii57685"),
    ('\u{05e6}', "tsadi"),
    ('\u{05e7}', "qof"),
    ('\u{05e8}', "resh"),
    ('\u{05e9}', "shin"),
    ('\u{05ea}', "tav"),
    ('\u{05f0}', "afii57716"),
    ('\u{05f1}', "afii57717"),
    ('\u{05f2}', "afii57718"),
    ('\u{05f3}', "gereshhebrew"),
    ('\u{05f4}', "gershayimhebrew"),
    ('\u{060c}', "afii57388"),
    ('\u{061b}', "afii57403"),
    ('\u{061f}', "afii57407"),
    ('\u{0621}', "afii57409"),
    ('\u{0622}', "afii57410"),
    ('\u{0623}', "afii57411"),
    ('\u{0624}', "afii57412"),
    ('\u{0625}', "afii57413"),
    ('\u{0626}', "afii57414"),
    ('\u{0627}', "afii57415"),
    ('\u{0628}', "afii57416"),
    ('\u{0629}', "afii57417"),
    ('\u{062a}', "afii57418"),
    ('\u{062b}', "afii57419"),
    ('\u{062c}', "afii57420"),
    ('\u{062d}', "afii57421"),
    ('\u{062e}', "afii57422"),
    ('\u{062f}', "afii57423"),
    ('\u{0630}', "afii57424"),
    ('\u{0631}', "afii57425"),
    ('\u{0632}', "afii57426"),
    ('\u{0633}', "afii57427"),
    ('\u{0634}', "afii57428"),
    ('\u{0635}', "afii57429"),
    ('\u{0636}', "afii57430"),
    ('\u{0637}', "afii57431"),
    ('\u{0638}', "afii57432"),
    ('\u{0639}', "afii57433"),
    ('\u{063a}', "afii57434"),
    ('\u{0640}', "afii57440"),
    ('\u{0641}', "afii57441"),
    ('\u{0642}', "afii57442"),
    ('\u{0643}', "afii57443"),
    ('\u{0644}', "afii57444"),
    ('\u{0645}', "afii57445"),
    ('\u{0646}', "afii57446"),
    ('\u{0647}', "afii57470"),
    ('\u{0648}', "afii57448"),
    ('\u{0649}', "afii57449"),
    ('\u{064a}', "afii57450"),
    ('\u{064b}', "afii57451"),
    ('\u{064c}', "afii57452"),
    ('\u{064d}', "afii57453"),
    ('\u{064e}', "afii57454"),
    ('\u{064f}', "afii57455"),
    ('\u{0650}', "afii57456"),
    ('\u{0651}', "afii57457"),
    ('\u{0652}', "afii57458"),
    ('\u{0660}', "afii57392"),
    ('\u{0661}', "afii57393"),
    ('\u{0662}', "afii57394"),
    ('\u{0663}', "afii57395"),
    ('\u{0664}', "afii57396"),
    ('\u{0665}', "afii57397"),
    ('\u{0666}', "afii57398"),
    ('\u{0667}', "afii57399"),
    ('\u{0668}', "afii57400"),
    ('\u{0669}', "afii57401"),
    ('\u{066a}', "afii57381"),
    ('\u{066b}', "decimalseparatorarabic"),
    ('\u{066c}', "thousandsseparatorarabic"),
    ('\u{066d}', "afii63167"),
    ('\u{0679}', "afii57511"),
    ('\u{067e}', "afii57506"),
    ('\u{0686}', "afii57507"),
    ('\u{0688}', "afii57512"),
    ('\u{0691}', "afii57513"),
    ('\u{0698}', "afii57508"),
    ('\u{06a4}', "afii57505"),
    ('\u{06af}', "afii57509"),
    ('\u{06ba}', "afii57514"),
    ('\u{06c1}', "haaltonearabic"),
    ('\u{06d1}', "yehthreedotsbelowarabic"),
    ('\u{06d2}', "afii57519"),
    ('\u{06d5}', "afii57534"),
    ('\u{06f0}', "zeropersian"),
    ('\u{06f1}', "onepersian"),
    ('\u{06f2}', "twopersian"),
    ('\u{06f3}', "threepersian"),
    ('\u{06f4}', "fourpersian"),
    ('\u{06f5}', "fivepersian"),
    ('\u{06f6}', "sixpersian"),
    ('\u{06f7}', "sevenpersian"),
    ('\u{06f8}', "eightpersian"),
    ('\u{06f9}', "ninepersian"),
    ('\u{0901}', "candrabindudeva"),
    ('\u{0902}', "anusvaradeva"),
    ('\u{0903}', "visargadeva"),
    ('\u{0905}', "adeva"),
    ('\u{0906}', "aadeva"),
    ('\u{0907}', "ideva"),
    ('\u{0908}', "iideva"),
    ('\u{0909}', "udeva"),
    ('\u{090a}', "uudeva"),
    ('\u{090b}', "rvocalicdeva"),
    ('\u{090c}', "lvocalicdeva"),
    ('\u{090d}', "ecandradeva"),
    ('\u{090e}', "eshortdeva"),
    ('\u{090f}', "edeva"),
    ('\u{0910}', "aideva"),
    ('\u{0911}', "ocandradeva"),
    ('\u{0912}', "oshortdeva"),
    ('\u{0913}', "odeva"),
    ('\u{0914}', "audeva"),
    ('\u{0915}', "kadeva"),
    ('\u{0916}', "khadeva"),
    ('\u{0917}', "gadeva"),
    ('\u{0918}', "ghadeva"),
    ('\u{0919}', "ngadeva"),
    ('\u{091a}', "cadeva"),
    ('\u{091b}', "chadeva"),
    ('\u{091c}', "jadeva"),
    ('\u{091d}', "jhadeva"),
    ('\u{091e}', "nyadeva"),
    ('\u{091f}', "ttadeva"),
    ('\u{0920}', "tthadeva"),
    ('\u{0921}', "ddadeva"),
    ('\u{0922}', "ddhadeva"),
    ('\u{0923}', "nnadeva"),
    ('\u{0924}', "tadeva"),
    ('\u{0925}', "thadeva"),
    ('\u{0926}', "dadeva"),
    ('\u{0927}', "dhadeva"),
    ('\u{0928}', "nadeva"),
    ('\u{0929}', "nnnadeva"),
    ('\u{092a}', "padeva"),
    ('\u{092b}', "phadeva"),
    ('\u{092c}', "badeva"),
    ('\u{092d}', "bhadeva"),
    ('\u{092e}', "madeva"),
    ('\u{092f}', "yadeva"),
    ('\u{0930}', "radeva"),
    ('\u{0931}', "rradeva"),
    ('\u{0932}', "ladeva"),
    ('\u{0933}', "lladeva"),
    ('\u{0934}', "llladeva"),
    ('\u{0935}', "vadeva"),
    ('\u{0936}', "shadeva"),
    ('\u{0937}', "ssadeva"),
    ('\u{0938}', "sadeva"),
    ('\u{0939}', "hadeva"),
    ('\u{093c}', "nuktadeva"),
    ('\u{093d}', "avagrahadeva"),
    ('\u{093e}', "aavowelsigndeva"),
    ('\u{093f}', "ivowelsigndeva"),
    ('\u{0940}', "iivowelsigndeva"),
    ('\u{0941}', "uvowelsigndeva"),
    ('\u{0942}', "uuvowelsigndeva"),
    ('\u{0943}', "rvocalicvowelsigndeva"),
    ('\u{0944}', "rrvocalicvowelsigndeva"),
    ('\u{0945}', "ecandravowelsigndeva"),
    ('\u{0946}', "eshortvowelsigndeva"),
    ('\u{0947}', "evowelsigndeva"),
    ('\u{0948}', "aivowelsigndeva"),
    ('\u{0949}', "ocandravowelsigndeva"),
    ('\u{094a}', "oshortvowelsigndeva"),
    ('\u{094b}', "ovowelsigndeva"),
    ('\u{094c}', "auvowelsigndeva"),
    ('\u{094d}', "viramadeva"),
    ('\u{0950}', "omdeva"),
    ('\u{0951}', "udattadeva"),
    ('\u{0952}', "anudattadeva"),
    ('\u{0953}', "gravedeva"),
    ('\u{0954}', "acutedeva"),
    ('\u{0958}', "qadeva"),
    ('\u{0959}', "khhadeva"),
    ('\u{095a}', "ghhadeva"),
    ('\u{095b}', "zadeva"),
    ('\u{095c}', "dddhadeva"),
    ('\u{095d}', "rhadeva"),
    ('\u{095e}', "fadeva"),
    ('\u{095f}', "yyadeva"),
    ('\u{0960}', "rrvocalicdeva"),
    ('\u{0961}', "llvocalicdeva"),
    ('\u{0962}', "lvocalicvowelsigndeva"),
    ('\u{0963}', "llvocalicvowelsigndeva"),
    ('\u{0964}', "danda"),
    ('\u{0965}', "dbldanda"),
    ('\u{0966}', "zerodeva"),
    ('\u{0967}', "onedeva"),
    ('\u{0968}', "twodeva"),
    ('\u{0969}', "threedeva"),
    ('\u{096a}', "fourdeva"),
    ('\u{096b}', "fivedeva"),
    ('\u{096c}', "sixdeva"),
    ('\u{096d}', "sevendeva"),
    ('\u{096e}', "eightdeva"),
    ('\u{096f}', "ninedeva"),
    ('\u{0970}', "abbreviationsigndeva"),
    ('\u{0981}', "candrabindubengali"),
    ('\u{0982}', "anusvarabengali"),
    ('\u{0983}', "visargabengali"),
    ('\u{0985}', "abengali"),
    ('\u{0986}', "aabengali"),
    ('\u{0987}', "ibengali"),
    ('\u{0988}', "iibengali"),
    ('\u{0989}', "ubengali"),
    ('\u{098a}', "uubengali"),
    ('\u{098b}', "rvocalicbengali"),
    ('\u{098c}', "lvocalicbengali"),
    ('\u{098f}', "ebengali"),
    ('\u{0990}', "aibengali"),
    ('\u{0993}', "obengali"),
    ('\u{0994}', "aubengali"),
    ('\u{0995}', "kabengali"),
    ('\u{0996}', "khabengali"),
    ('\u{0997}', "gabengali"),
    ('\u{0998}', "ghabengali"),
    ('\u{0999}', "ngabengali"),
    ('\u{099a}', "cabengali"),
    ('\u{099b}', "chabengali"),
    ('\u{099c}', "jabengali"),
    ('\u{099d}', "jhabengali"),
    ('\u{099e}', "nyabengali"),
    ('\u{099f}', "ttabengali"),
    ('\u{09a0}', "tthabengali"),
    ('\u{09a1}', "ddabengali"),
    ('\u{09a2}', "ddhabengali"),
    ('\u{09a3}', "nnabengali"),
    ('\u{09a4}', "tabengali"),
    ('\u{09a5}', "thabengali"),
    ('\u{09a6}', "dabengali"),
    ('\u{09a7}', "dhabengali"),
    ('\u{09a8}', "nabengali"),
    ('\u{09aa}', "pabengali"),
    ('\u{09ab}', "phabengali"),
    ('\u{09ac}', "babengali"),
    ('\u{09ad}', "bhabengali"),
    ('\u{09ae}', "mabengali"),
    ('\u{09af}', "yabengali"),
    ('\u{09b0}', "rabengali"),
    ('\u{09b2}', "labengali"),
    ('\u{09b6}', "shabengali"),
    ('\u{09b7}', "ssabengali"),
    ('\u{09b8}', "sabengali"),
    ('\u{09b9}', "habengali"),
    ('\u{09bc}', "nuktabengali"),
    ('\u{09be}', "aavowelsignbengali"),
    ('\u{09bf}', "ivowelsignbengali"),
    ('\u{09c0}', "iivowelsignbengali"),
    ('\u{09c1}', "uvowelsignbengali"),
    ('\u{09c2}', "uuvowelsignbengali"),
    ('\u{09c3}', "rvocalicvowelsignbengali"),
    ('\u{09c4}', "rrvocalicvowelsignbengali"),
    ('\u{09c7}', "evowelsignbengali"),
    ('\u{09c8}', "aivowelsignbengali"),
    ('\u{09cb}', "ovowelsignbengali"),
    ('\u{09cc}', "auvowelsignbengali"),
    ('\u{09cd}', "viramabengali"),
    ('\u{09d7}', "aulengthmarkbengali"),
    ('\u{09dc}', "rrabengali"),
    ('\u{09dd}', "rhabengali"),
    ('\u{09df}', "yyabengali"),
    ('\u{09e0}', "rrvocalicbengali"),
    ('\u{09e1}', "llvocalicbengali"),
    ('\u{09e2}', "lvocalicvowelsignbengali"),
    ('\u{09e3}', "llvocalicvowelsignbengali"),
    ('\u{09e6}', "zerobengali"),
    ('\u{09e7}', "onebengali"),
    ('\u{09e8}', "twobengali"),
    ('\u{09e9}', "threebengali"),
    ('\u{09ea}', "fourbengali"),
    ('\u{09eb}', "fivebengali"),
    ('\u{09ec}', "sixbengali"),
    ('\u{09ed}', "sevenbengali"),
    ('\u{09ee}', "eightbengali"),
    ('\u{09ef}', "ninebengali"),
    ('\u{09f0}', "ramiddlediagonalbengali"),
    ('\u{09f1}', "ralowerdiagonalbengali"),
    ('\u{09f2}', "rupeemarkbengali"),
    ('\u{09f3}', "rupeesignbengali"),
    ('\u{09f4}', "onenumeratorbengali"),
    ('\u{09f5}', "twonumeratorbengali"),
    ('\u{09f6}', "threenumeratorbengali"),
    ('\u{09f7}', "fournumeratorbengali"),
    ('\u{09f8}', "denominatorminusonenumeratorbengali"),
    ('\u{09f9}', "sixteencurrencydenominatorbengali"),
    ('\u{09fa}', "issharbengali"),
    ('\u{0a02}', "bindigurmukhi"),
    ('\u{0a05}', "agurmukhi"),
    ('\u{0a06}', "aagurmukhi"),
    ('\u{0a07}', "igurmukhi"),
    ('\u{0a08}', "iigurmukhi"),
    ('\u{0a09}', "ugurmukhi"),
    ('\u{0a0a}', "uugurmukhi"),
    ('\u{0a0f}', "eegurmukhi"),
    ('\u{0a10}', "aigurmukhi"),
    ('\u{0a13}', "oogurmukhi"),
    ('\u{0a14}', "augurmukhi"),
    ('\u{0a15}', "kagurmukhi"),
    ('\u{0a16}', "khagurmukhi"),
    ('\u{0a17}', "gagurmukhi"),
    ('\u{0a18}', "ghagurmukhi"),
    ('\u{0a19}', "ngagurmukhi"),
    ('\u{0a1a}', "cagurmukhi"),
    ('\u{0a1b}', "chagurmukhi"),
    ('\u{0a1c}', "jagurmukhi"),
    ('\u{0a1d}', "jhagurmukhi"),
    ('\u{0a1e}', "nyagurmukhi"),
    ('\u{0a1f}', "ttagurmukhi"),
    ('\u{0a20}', "tthagurmukhi"),
    ('\u{0a21}', "ddagurmukhi"),
    ('\u{0a22}', "ddhagurmukhi"),
    ('\u{0a23}', "nnagurmukhi"),
    ('\u{0a24}', "tagurmukhi"),
    ('\u{0a25}', "thagurmukhi"),
    ('\u{0a26}', "dagurmukhi"),
    ('\u{0a27}', "dhagurmukhi"),
    ('\u{0a28}', "nagurmukhi"),
    ('\u{0a2a}', "pagurmukhi"),
    ('\u{0a2b}', "phagurmukhi"),
    ('\u{0a2c}', "bagurmukhi"),
    ('\u{0a2d}', "bhagurmukhi"),
    ('\u{0a2e}', "magurmukhi"),
    ('\u{0a2f}', "yagurmukhi"),
    ('\u{0a30}', "ragurmukhi"),
    ('\u{0a32}', "lagurmukhi"),
    ('\u{0a35}', "vagurmukhi"),
    ('\u{0a36}', "shagurmukhi"),
    ('\u{0a38}', "sagurmukhi"),
    ('\u{0a39}', "hagurmukhi"),
    ('\u{0a3c}', "nuktagurmukhi"),
    ('\u{0a3e}', "aamatragurmukhi"),
    ('\u{0a3f}', "imatragurmukhi"),
    ('\u{0a40}', "iimatragurmukhi"),
    ('\u{0a41}', "umatragurmukhi"),
    ('\u{0a42}', "uumatragurmukhi"),
    ('\u{0a47}', "eematragurmukhi"),
    ('\u{0a48}', "aimatragurmukhi"),
    ('\u{0a4b}', "oomatragurmukhi"),
    ('\u{0a4c}', "aumatragurmukhi"),
    ('\u{0a4d}', "halantgurmukhi"),
    ('\u{0a59}', "khhagurmukhi"),
    ('\u{0a5a}', "ghhagurmukhi"),
    ('\u{0a5b}', "zagurmukhi"),
    ('\u{0a5c}', "rragurmukhi"),
    ('\u{0a5e}', "fagurmukhi"),
    ('\u{0a66}', "zerogurmukhi"),
    ('\u{0a67}', "onegurmukhi"),
    ('\u{0a68}', "twogurmukhi"),
    ('\u{0a69}', "threegurmukhi"),
    ('\u{0a6a}', "fourgurmukhi"),
    ('\u{0a6b}', "fivegurmukhi"),
    ('\u{0a6c}', "sixgurmukhi"),
    ('\u{0a6d}', "sevengurmukhi"),
    ('\u{0a6e}', "eightgurmukhi"),
    ('\u{0a6f}', "ninegurmukhi"),
    ('\u{0a70}', "tippigurmukhi"),
    ('\u{0a71}', "addakgurmukhi"),
    ('\u{0a72}', "irigurmukhi"),
    ('\u{0a73}', "uragurmukhi"),
    ('\u{0a74}', "ekonkargurmukhi"),
    ('\u{0a81}', "candrabindugujarati"),
    ('\u{0a82}', "anusvaragujarati"),
    ('\u{0a83}', "visargagujarati"),
    ('\u{0a85}', "agujarati"),
    ('\u{0a86}', "aagujarati"),
    ('\u{0a87}', "igujarati"),
    ('\u{0a88}', "iigujarati"),
    ('\u{0a89}', "ugujarati"),
    ('\u{0a8a}', "uugujarati"),
    ('\u{0a8b}', "rvocalicgujarati"),
    ('\u{0a8d}', "ecandragujarati"),
    ('\u{0a8f}', "egujarati"),
    ('\u{0a90}', "aigujarati"),
    ('\u{0a91}', "ocandragujarati"),
    ('\u{0a93}', "ogujarati"),
    ('\u{0a94}', "augujarati"),
    ('\u{0a95}', "kagujarati"),
    ('\u{0a96}', "khagujarati"),
    ('\u{0a97}', "gagujarati"),
    ('\u{0a98}', "ghagujarati"),
    ('\u{0a99}', "ngagujarati"),
    ('\u{0a9a}', "cagujarati"),
    ('\u{0a9b}', "chagujarati"),
    ('\u{0a9c}', "jagujarati"),
    ('\u{0a9d}', "jhagujarati"),
    ('\u{0a9e}', "nyagujarati"),
    ('\u{0a9f}', "ttagujarati"),
    ('\u{0aa0}', "tthagujarati"),
    ('\u{0aa1}', "ddagujarati"),
    ('\u{0aa2}', "ddhagujarati"),
    ('\u{0aa3}', "nnagujarati"),
    ('\u{0aa4}', "tagujarati"),
    ('\u{0aa5}', "thagujarati"),
    ('\u{0aa6}', "dagujarati"),
    ('\u{0aa7}', "dhagujarati"),
    ('\u{0aa8}', "nagujarati"),
    ('\u{0aaa}', "pagujarati"),
    ('\u{0aab}', "phagujarati"),
    ('\u{0aac}', "bagujarati"),
    ('\u{0aad}', "bhagujarati"),
    ('\u{0aae}', "magujarati"),
    ('\u{0aaf}', "yagujarati"),
    ('\u{0ab0}', "ragujarati"),
    ('\u{0ab2}', "lagujarati"),
    ('\u{0ab3}', "llagujarati"),
    ('\u{0ab5}', "vagujarati"),
    ('\u{0ab6}', "shagujarati"),
    ('\u{0ab7}', "ssagujarati"),
    ('\u{0ab8}', "sagujarati"),
    ('\u{0ab9}', "hagujarati"),
    ('\u{0abc}', "nuktagujarati"),
    ('\u{0abe}', "aavowelsigngujarati"),
    ('\u{0abf}', "ivowelsigngujarati"),
    ('\u{0ac0}', "iivowelsigngujarati"),
    ('\u{0ac1}', "uvowelsigngujarati"),
    ('\u{0ac2}', "uuvowelsigngujarati"),
    ('\u{0ac3}', "rvocalicvowelsigngujarati"),
    ('\u{0ac4}', "rrvocalicvowelsigngujarati"),
    ('\u{0ac5}', "ecandravowelsigngujarati"),
    ('\u{0ac7}', "evowelsigngujarati"),
    ('\u{0ac8}', "aivowelsigngujarati"),
    ('\u{0ac9}', "ocandravowelsigngujarati"),
    ('\u{0acb}', "ovowelsigngujarati"),
    ('\u{0acc}', "auvowelsigngujarati"),
    ('\u{0acd}', "viramagujarati"),
    ('\u{0ad0}', "omgujarati"),
    ('\u{0ae0}', "rrvocalicgujarati"),
    ('\u{0ae6}', "zerogujarati"),
    ('\u{0ae7}', "onegujarati"),
    ('\u{0ae8}', "twogujarati"),
    ('\u{0ae9}', "threegujarati"),
    ('\u{0aea}', "fourgujarati"),
    ('\u{0aeb}', "fivegujarati"),
    ('\u{0aec}', "sixgujarati"),
    ('\u{0aed}', "sevengujarati"),
    ('\u{0aee}', "eightgujarati"),
    ('\u{0aef}', "ninegujarati"),
    ('\u{0e01}', "kokaithai"),
    ('\u{0e02}', "khokhaithai"),
    ('\u{0e03}', "khokhuatthai"),
    ('\u{0e04}', "khokhwaithai"),
    ('\u{0e05}', "khokhonthai"),
    ('\u{0e06}', "khorakhangthai"),
    ('\u{0e07}', "ngonguthai"),
    ('\u{0e08}', "chochanthai"),
    ('\u{0e09}', "chochingthai"),
    ('\u{0e0a}', "chochangthai"),
    ('\u{0e0b}', "sosothai"),
    ('\u{0e0c}', "chochoethai"),
    ('\u{0e0d}', "yoyingthai"),
    ('\u{0e0e}', "dochadathai"),
    ('\u{0e0f}', "topatakthai"),
    ('\u{0e10}', "thothanthai"),
    ('\u{0e11}', "thonangmonthothai"),
    ('\u{0e12}', "thophuthaothai"),
    ('\u{0e13}', "nonenthai"),
    ('\u{0e14}', "dodekthai"),
    ('\u{0e15}', "totaothai"),
    ('\u{0e16}', "thothungthai"),
    ('\u{0e17}', "thothahanthai"),
    ('\u{0e18}', "thothongthai"),
    ('\u{0e19}', "nonuthai"),
    ('\u{0e1a}', "bobaimaithai"),
    ('\u{0e1b}', "poplathai"),
    ('\u{0e1c}', "phophungthai"),
    ('\u{0e1d}', "fofathai"),
    ('\u{0e1e}', "phophanthai"),
    ('\u{0e1f}', "fofanthai"),
    ('\u{0e20}', "phosamphaothai"),
    ('\u{0e21}', "momathai"),
    ('\u{0e22}', "yoyakthai"),
    ('\u{0e23}', "roruathai"),
    ('\u{0e24}', "ruthai"),
    ('\u{0e25}', "lolingthai"),
    ('\u{0e26}', "luthai"),
    ('\u{0e27}', "wowaenthai"),
    ('\u{0e28}', "sosalathai"),
    ('\u{0e29}', "sorusithai"),
    ('\u{0e2a}', "sosuathai"),
    ('\u{0e2b}', "hohipthai"),
    ('\u{0e2c}', "lochulathai"),
    ('\u{0e2d}', "oangthai"),
    ('\u{0e2e}', "honokhukthai"),
    ('\u{0e2f}', "paiyannoithai"),
    ('\u{0e30}', "saraathai"),
    ('\u{0e31}', "maihanakatthai"),
    ('\u{0e32}', "saraaathai"),
    ('\u{0e33}', "saraamthai"),
    ('\u{0e34}', "saraithai"),
    ('\u{0e35}', "saraiithai"),
    ('\u{0e36}', "sarauethai"),
    ('\u{0e37}', "saraueethai"),
    ('\u{0e38}', "sarauthai"),
    ('\u{0e39}', "sarauuthai"),
    ('\u{0e3a}', "phinthuthai"),
    ('\u{0e3f}', "bahtthai"),
    ('\u{0e40}', "saraethai"),
    ('\u{0e41}', "saraaethai"),
    ('\u{0e42}', "saraothai"),
    ('\u{0e43}', "saraaimaimuanthai"),
    ('\u{0e44}', "saraaimaimalaithai"),
    ('\u{0e45}', "lakkhangyaothai"),
    ('\u{0e46}', "maiyamokthai"),
    ('\u{0e47}', "maitaikhuthai"),
    ('\u{0e48}', "maiekthai"),
    ('\u{0e49}', "maithothai"),
    ('\u{0e4a}', "maitrithai"),
    ('\u{0e4b}', "maichattawathai"),
    ('\u{0e4c}', "thanthakhatthai"),
    ('\u{0e4d}', "nikhahitthai"),
    ('\u{0e4e}', "yamakkanthai"),
    ('\u{0e4f}', "fongmanthai"),
    ('\u{0e50}', "zerothai"),
    ('\u{0e51}', "onethai"),
    ('\u{0e52}', "twothai"),
    ('\u{0e53}', "threethai"),
    ('\u{0e54}', "fourthai"),
    ('\u{0e55}', "fivethai"),
    ('\u{0e56}', "sixthai"),
    ('\u{0e57}', "seventhai"),
    ('\u{0e58}', "eightthai"),
    ('\u{0e59}', "ninethai"),
    ('\u{0e5a}', "angkhankhuthai"),
    ('\u{0e5b}', "khomutthai"),
    ('\u{1e00}', "Aringbelow"),
    ('\u{1e01}', "aringbelow"),
    ('\u{1e02}', "Bdotaccent"),
    ('\u{1e03}', "bdotaccent"),
    ('\u{1e04}', "Bdotbelow"),
    ('\u{1e05}', "bdotbelow"),
    ('\u{1e06}', "Blinebelow"),
    ('\u{1e07}', "blinebelow"),
    ('\u{1e08}', "Ccedillaacute"),
    ('\u{1e09}', "ccedillaacute"),
    ('\u{1e0a}', "Ddotaccent"),
    ('\u{1e0b}', "ddotaccent"),
    ('\u{1e0c}', "Ddotbelow"),
    ('\u{1e0d}', "ddotbelow"),
    ('\u{1e0e}', "Dlinebelow"),
    ('\u{1e0f}', "dlinebelow"),
    ('\u{1e10}', "Dcedilla"),
    ('\u{1e11}', "dcedilla"),
    ('\u{1e12}', "Dcircumflexbelow"),
    ('\u{1e13}', "dcircumflexbelow"),
    ('\u{1e14}', "Emacrongrave"),
    ('\u{1e15}', "emacrongrave"),
    ('\u{1e16}', "Emacronacute"),
    ('\u{1e17}', "emacronacute"),
    ('\u{1e18}', "Ecircumflexbelow"),
    ('\u{1e19}', "ecircumflexbelow"),
    ('\u{1e1a}', "Etildebelow"),
    ('\u{1e1b}', "etildebelow"),
    ('\u{1e1c}', "Ecedillabreve"),
    ('\u{1e1d}', "ecedillabreve"),
    ('\u{1e1e}', "Fdotaccent"),
    ('\u{1e1f}', "fdotaccent"),
    ('\u{1e20}', "Gmacron"),
    ('\u{1e21}', "gmacron"),
    ('\u{1e22}', "Hdotaccent"),
    ('\u{1e23}', "hdotaccent"),
    ('\u{1e24}', "Hdotbelow"),
    ('\u{1e25}', "hdotbelow"),
    ('\u{1e26}', "Hdieresis"),
    ('\u{1e27}', "hdieresis"),
    ('\u{1e28}', "Hcedilla"),
    ('\u{1e29}', "hcedilla"),
    ('\u{1e2a}', "Hbrevebelow"),
    ('\u{1e2b}', "hbrevebelow"),
    ('\u{1e2c}', "Itildebelow"),
    ('\u{1e2d}', "itildebelow"),
    ('\u{1e2e}', "Idieresisacute"),
    ('\u{1e2f}', "idieresisacute"),
    ('\u{1e30}', "Kacute"),
    ('\u{1e31}', "kacute"),
    ('\u{1e32}', "Kdotbelow"),
    ('\u{1e33}', "kdotbelow"),
    ('\u{1e34}', "Klinebelow"),
    ('\u{1e35}', "klinebelow"),
    ('\u{1e36}', "Ldotbelow"),
    ('\u{1e37}', "ldotbelow"),
    ('\u{1e38}', "Ldotbelowmacron"),
    ('\u{1e39}', "ldotbelowmacron"),
    ('\u{1e3a}', "Llinebelow"),
    ('\u{1e3b}', "llinebelow"),
    ('\u{1e3c}', "Lcircumflexbelow"),
    ('\u{1e3d}', "lcircumflexbelow"),
    ('\u{1e3e}', "Macute"),
    ('\u{1e3f}', "macute"),
    ('\u{1e40}', "Mdotaccent"),
    ('\u{1e41}', "mdotaccent"),
    ('\u{1e42}', "Mdotbelow"),
    ('\u{1e43}', "mdotbelow"),
    ('\u{1e44}', "Ndotaccent"),
    ('\u{1e45}', "ndotaccent"),
    ('\u{1e46}', "Ndotbelow"),
    ('\u{1e47}', "ndotbelow"),
    ('\u{1e48}', "Nlinebelow"),
    ('\u{1e49}', "nlinebelow"),
    ('\u{1e4a}', "Ncircumflexbelow"),
    ('\u{1e4b}', "ncircumflexbelow"),
    ('\u{1e4c}', "Otildeacute"),
    ('\u{1e4d}', "otildeacute"),
    ('\u{1e4e}', "Otildedieresis"),
    ('\u{1e4f}', "otildedieresis"),
    ('\u{1e50}', "Omacrongrave"),
    ('\u{1e51}', "omacrongrave"),
    ('\u{1e52}', "Omacronacute"),
    ('\u{1e53}', "omacronacute"),
    ('\u{1e54}', "Pacute"),
    ('\u{1e55}', "pacute"),
    ('\u{1e56}', "Pdotaccent"),
    ('\u{1e57}', "pdotaccent"),
    ('\u{1e58}', "Rdotaccent"),
    ('\u{1e59}', "rdotaccent"),
    ('\u{1e5a}', "Rdotbelow"),
    ('\u{1e5b}', "rdotbelow"),
    ('\u{1e5c}', "Rdotbelowmacron"),
    ('\u{1e5d}', "rdotbelowmacron"),
    ('\u{1e5e}', "Rlinebelow"),
    ('\u{1e5f}', "rlinebelow"),
    ('\u{1e60}', "Sdotaccent"),
    ('\u{1e61}', "sdotaccent"),
    ('\u{1e62}', "Sdotbelow"),
    ('\u{1e63}', "sdotbelow"),
    ('\u{1e64}', "Sacutedotaccent"),
    ('\u{1e65}', "sacutedotaccent"),
    ('\u{1e66}', "Scarondotaccent"),
    ('\u{1e67}', "scarondotaccent"),
    ('\u{1e68}', "Sdotbelowdotaccent"),
    ('\u{1e69}', "sdotbelowdotaccent"),
    ('\u{1e6a}', "Tdotaccent"),
    ('\u{1e6b}', "tdotaccent"),
    ('\u{1e6c}', "Tdotbelow"),
    ('\u{1e6d}', "tdotbelow"),
    ('\u{1e6e}', "Tlinebelow"),
    ('\u{1e6f}', "tlinebelow"),
    ('\u{1e70}', "Tcircumflexbelow"),
    ('\u{1e71}', "tcircumflexbelow"),
    ('\u{1e72}', "Udieresisbelow"),
    ('\u{1e73}', "udieresisbelow"),
    ('\u{1e74}', "Utildebelow"),
    ('\u{1e75}', "utildebelow"),
    ('\u{1e76}', "Ucircumflexbelow"),
    ('\u{1e77}', "ucircumflexbelow"),
    ('\u{1e78}', "Utildeacute"),
    ('\u{1e79}', "utildeacute"),
    ('\u{1e7a}', "Umacrondieresis"),
    ('\u{1e7b}', "umacrondieresis"),
    ('\u{1e7c}', "Vtilde"),
    ('\u{1e7d}', "vtilde"),
    ('\u{1e7e}', "Vdotbelow"),
    ('\u{1e7f}', "vdotbelow"),
    ('\u{1e80}', "Wgrave"),
    ('\u{1e81}', "wgrave"),
    ('\u{1e82}', "Wacute"),
    ('\u{1e83}', "wacute"),
    ('\u{1e84}', "Wdieresis"),
    ('\u{1e85}', "wdieresis"),
    ('\u{1e86}', "Wdotaccent"),
    ('\u{1e87}', "wdotaccent"),
    ('\u{1e88}', "Wdotbelow"),
    ('\u{1e89}', "wdotbelow"),
    ('\u{1e8a}', "Xdotaccent"),
    ('\u{1e8b}', "xdotaccent"),
    ('\u{1e8c}', "Xdieresis"),
    ('\u{1e8d}', "xdieresis"),
    ('\u{1e8e}', "Ydotaccent"),
    ('\u{1e8f}', "ydotaccent"),
    ('\u{1e90}', "Zcircumflex"),
    ('\u{1e91}', "zcircumflex"),
    ('\u{1e92}', "Zdotbelow"),
    ('\u{1e93}', "zdotbelow"),
    ('\u{1e94}', "Zlinebelow"),
    ('\u{1e95}', "zlinebelow"),
    ('\u{1e96}', "hlinebelow"),
    ('\u{1e97}', "tdieresis"),
    ('\u{1e98}', "wring"),
    ('\u{1e99}', "yring"),
    ('\u{1e9a}', "arighthalfring"),
    ('\u{1e9b}', "slongdotaccent"),
    ('\u{1e9e}', "Germandbls2"),
    ('\u{1ea0}', "Adotbelow"),
    ('\u{1ea1}', "adotbelow"),
    ('\u{1ea2}', "Ahookabove"),
    ('\u{1ea3}', "ahookabove"),
    ('\u{1ea4}', "Acircumflexacute"),
    ('\u{1ea5}', "acircumflexacute"),
    ('\u{1ea6}', "Acircumflexgrave"),
    ('\u{1ea7}', "acircumflexgrave"),
    ('\u{1ea8}', "Acircumflexhookabove"),
    ('\u{1ea9}', "acircumflexhookabove"),
    ('\u{1eaa}', "Acircumflextilde"),
    ('\u{1eab}', "acircumflextilde"),
    ('\u{1eac}', "Acircumflexdotbelow"),
    ('\u{1ead}', "acircumflexdotbelow"),
    ('\u{1eae}', "Abreveacute"),
    ('\u{1eaf}', "abreveacute"),
    ('\u{1eb0}', "Abrevegrave"),
    ('\u{1eb1}', "abrevegrave"),
    ('\u{1eb2}', "Abrevehookabove"),
    ('\u{1eb3}', "abrevehookabove"),
    ('\u{1eb4}', "Abrevetilde"),
    ('\u{1eb5}', "abrevetilde"),
    ('\u{1eb6}', "Abrevedotbelow"),
    ('\u{1eb7}', "abrevedotbelow"),
    ('\u{1eb8}', "Edotbelow"),
    ('\u{1eb9}', "edotbelow"),
    ('\u{1eba}', "Ehookabove"),
    ('\u{1ebb}', "ehookabove"),
    ('\u{1ebc}', "Etilde"),
    ('\u{1ebd}', "etilde"),
    ('\u{1ebe}', "Ecircumflexacute"),
    ('\u{1ebf}', "ecircumflexacute"),
    ('\u{1ec0}', "Ecircumflexgrave"),
    ('\u{1ec1}', "ecircumflexgrave"),
    ('\u{1ec2}', "Ecircumflexhookabove"),
    ('\u{1ec3}', "ecircumflexhookabove"),
    ('\u{1ec4}', "Ecircumflextilde"),
    ('\u{1ec5}', "ecircumflextilde"),
    ('\u{1ec6}', "Ecircumflexdotbelow"),
    ('\u{1ec7}', "ecircumflexdotbelow"),
    ('\u{1ec8}', "Ihookabove"),
    ('\u{1ec9}', "ihookabove"),
    ('\u{1eca}', "Idotbelow"),
    ('\u{1ecb}', "idotbelow"),
    ('\u{1ecc}', "Odotbelow"),
    ('\u{1ecd}', "odotbelow"),
    ('\u{1ece}', "Ohookabove"),
    ('\u{1ecf}', "ohookabove"),
    ('\u{1ed0}', "Ocircumflexacute"),
    ('\u{1ed1}', "ocircumflexacute"),
    ('\u{1ed2}', "Ocircumflexgrave"),
    ('\u{1ed3}', "ocircumflexgrave"),
    ('\u{1ed4}', "Ocircumflexhookabove"),
    ('\u{1ed5}', "ocircumflexhookabove"),
    ('\u{1ed6}', "Ocircumflextilde"),
    ('\u{1ed7}', "ocircumflextilde"),
    ('\u{1ed8}', "Ocircumflexdotbelow"),
    ('\u{1ed9}', "ocircumflexdotbelow"),
    ('\u{1eda}', "Ohornacute"),
    ('\u{1edb}', "ohornacute"),
    ('\u{1edc}', "Ohorngrave"),
    ('\u{1edd}', "ohorngrave"),
    ('\u{1ede}', "Ohornhookabove"),
    ('\u{1edf}', "ohornhookabove"),
    ('\u{1ee0}', "Ohorntilde"),
    ('\u{1ee1}', "ohorntilde"),
    ('\u{1ee2}', "Ohorndotbelow"),
    ('\u{1ee3}', "ohorndotbelow"),
    ('\u{1ee4}', "Udotbelow"),
    ('\u{1ee5}', "udotbelow"),
    ('\u{1ee6}', "Uhookabove"),
    ('\u{1ee7}', "uhookabove"),
    ('\u{1ee8}', "Uhornacute"),
    ('\u{1ee9}', "uhornacute"),
    ('\u{1eea}', "Uhorngrave"),
    ('\u{1eeb}', "uhorngrave"),
    ('\u{1eec}', "Uhornhookabove"),
    ('\u{1eed}', "uhornhookabove"),
    ('\u{1eee}', "Uhorntilde"),
    ('\u{1eef}', "uhorntilde"),
    ('\u{1ef0}', "Uhorndotbelow"),
    ('\u{1ef1}', "uhorndotbelow"),
    ('\u{1ef2}', "Ygrave"),
    ('\u{1ef3}', "ygrave"),
    ('\u{1ef4}', "Ydotbelow"),
    ('\u{1ef5}', "ydotbelow"),
    ('\u{1ef6}', "Yhookabove"),
    ('\u{1ef7}', "yhookabove"),
    ('\u{1ef8}', "Ytilde"),
    ('\u{1ef9}', "ytilde"),
    ('\u{2002}', "enspace"),
    ('\u{200b}', "zerowidthspace"),
    ('\u{200c}', "cwm"),
    ('\u{200d}', "afii301"),
    ('\u{200e}', "afii299"),
    ('\u{200f}', "afii300"),
    ('\u{2010}', "hyphentwo"),
    ('\u{2012}', "figuredash"),
    ('\u{2013}', "endash"),
    ('\u{2014}', "emdash"),
    ('\u{2015}', "afii00208"),
    ('\u{2016}', "bardblex"),
    ('\u{2017}', "dbllowline"),
    ('\u{2018}', "quoteleft"),
    ('\u{2019}', "quoteright"),
    ('\u{201a}', "quotesinglbase"),
    ('\u{201b}', "quotereversed"),
    ('\u{201c}', "quotedblleft"),
    ('\u{201d}', "quotedblright"),
    ('\u{201e}', "quotedblbase"),
    ('\u{2020}', "dagger"),
    ('\u{2021}', "daggerdbl"),
    ('\u{2022}', "bullet"),
    ('\u{2024}', "onedotenleader"),
    ('\u{2025}', "twodotenleader"),
    ('\u{2026}', "ellipsis"),
    ('\u{202c}', "afii61573"),
    ('\u{202d}', "afii61574"),
    ('\u{202e}', "afii61575"),
    ('\u{2030}', "perthousand"),
    ('\u{2031}', "pertenthousand"),
    ('\u{2032}', "prime"),
    ('\u{2033}', "second"),
    ('\u{2035}', "primereversed"),
    ('\u{2039}', "guilsinglleft"),
    ('\u{203a}', "guilsinglright"),
    ('\u{203b}', "referencemark"),
    ('\u{203c}', "exclamdbl"),
    ('\u{203d}', "interrobang"),
    ('\u{203e}', "overline"),
    ('\u{2040}', "tie"),
    ('\u{2042}', "asterism"),
    ('\u{2044}', "fraction"),
    ('\u{2070}', "zerosuperior"),
    ('\u{2074}', "foursuperior"),
    ('\u{2075}', "fivesuperior"),
    ('\u{2076}', "sixsuperior"),
    ('\u{2077}', "sevensuperior"),
    ('\u{2078}', "eightsuperior"),
    ('\u{2079}', "ninesuperior"),
    ('\u{207a}', "plussuperior"),
    ('\u{207c}', "equalsuperior"),
    ('\u{207d}', "parenleftsuperior"),
    ('\u{207e}', "parenrightsuperior"),
    ('\u{207f}', "nsuperior"),
    ('\u{2080}', "zeroinferior"),
    ('\u{2081}', "oneinferior"),
    ('\u{2082}', "twoinferior"),
    ('\u{2083}', "threeinferior"),
    ('\u{2084}', "fourinferior"),
    ('\u{2085}', "fiveinferior"),
    ('\u{2086}', "sixinferior"),
    ('\u{2087}', "seveninferior"),
    ('\u{2088}', "eightinferior"),
    ('\u{2089}', "nineinferior"),
    ('\u{208d}', "parenleftinferior"),
    ('\u{208e}', "parenrightinferior"),
    ('\u{20a1}', "colonmonetary"),
    ('\u{20a2}', "cruzeiro"),
    ('\u{20a3}', "franc"),
    ('\u{20a4}', "lira"),
    ('\u{20a7}', "peseta"),
    ('\u{20a9}', "won"),
    ('\u{20aa}', "sheqel"),
    ('\u{20ab}', "dong"),
    ('\u{20ac}', "Euro"),
    ('\u{20d7}', "vector"),
    ('\u{20dd}', "circlecopyrt"),
    ('\u{2103}', "centigrade"),
    ('\u{2105}', "careof"),
    ('\u{2109}', "fahrenheit"),
    ('\u{2111}', "Ifractur"),
    ('\u{2113}', "lscript"),
    ('\u{2116}', "numero"),
    ('\u{2118}', "weierstrass"),
    ('\u{211c}', "Rfractur"),
    ('\u{211e}', "prescription"),
    ('\u{2121}', "telephone"),
    ('\u{2122}', "trademark"),
    ('\u{2126}', "Ohm"),
    ('\u{212b}', "angstrom"),
    ('\u{212e}', "estimated"),
    ('\u{2135}', "aleph"),
    ('\u{2153}', "onethird"),
    ('\u{2154}', "twothirds"),
    ('\u{215b}', "oneeighth"),
    ('\u{215c}', "threeeighths"),
    ('\u{215d}', "fiveeighths"),
    ('\u{215e}', "seveneighths"),
    ('\u{2160}', "Oneroman"),
    ('\u{2161}', "Tworoman"),
    ('\u{2162}', "Threeroman"),
    ('\u{2163}', "Fourroman"),
    ('\u{2164}', "Fiveroman"),
    ('\u{2165}', "Sixroman"),
    ('\u{2166}', "Sevenroman"),
    ('\u{2167}', "Eightroman"),
    ('\u{2168}', "Nineroman"),
    ('\u{2169}', "Tenroman"),
    ('\u{216a}', "Elevenroman"),
    ('\u{216b}', "Twelveroman"),
    ('\u{2170}', "oneroman"),
    ('\u{2171}', "tworoman"),
    ('\u{2172}', "threeroman"),
    ('\u{2173}', "fourroman"),
    ('\u{2174}', "fiveroman"),
    ('\u{2175}', "sixroman"),
    ('\u{2176}', "sevenroman"),
    ('\u{2177}', "eightroman"),
    ('\u{2178}', "nineroman"),
    ('\u{2179}', "tenroman"),
    ('\u{217a}', "elevenroman"),
    ('\u{217b}', "twelveroman"),
    ('\u{2190}', "arrowleft"),
    ('\u{2191}', "arrowtp"),
    ('\u{2192}', "arrowright"),
    ('\u{2193}', "arrowbt"),
    ('\u{2194}', "arrowboth"),
    ('\u{2195}', "arrowupdn"),
    ('\u{2196}', "arrowupleft"),
    ('\u{2197}', "arrowupright"),
    ('\u{2198}', "arrowdownright"),
    ('\u{2199}', "arrowdownleft"),
    ('\u{21a8}', "arrowupdnbse"),
    ('\u{21a9}', "hookleftchar"),
    ('\u{21aa}', "hookrightchar"),
    ('\u{21b5}', "carriagereturn"),
    ('\u{21bc}', "harpoonleftup"),
    ('\u{21bd}', "harpoonleftdown"),
    ('\u{21c0}', "harpoonrightup"),
    ('\u{21c1}', "harpoonrightdown"),
    ('\u{21c4}', "arrowrightoverleft"),
    ('\u{21c5}', "arrowupleftofdown"),
    ('\u{21c6}', "arrowleftoverright"),
    ('\u{21cd}', "arrowleftdblstroke"),
    ('\u{21cf}', "arrowrightdblstroke"),
    ('\u{21d0}', "arrowdblleft"),
    ('\u{21d1}', "arrowdbltp"),
    ('\u{21d2}', "arrowdblright"),
    ('\u{21d3}', "arrowdbldown"),
    ('\u{21d4}', "arrowdblboth"),
    ('\u{21d5}', "arrowdblbothv"),
    ('\u{21de}', "pageup"),
    ('\u{21df}', "pagedown"),
    ('\u{21e0}', "arrowdashleft"),
    ('\u{21e1}', "arrowdashup"),
    ('\u{21e2}', "arrowdashright"),
    ('\u{21e3}', "arrowdashdown"),
    ('\u{21e4}', "arrowtableft"),
    ('\u{21e5}', "arrowtabright"),
    ('\u{21e6}', "arrowleftwhite"),
    ('\u{21e7}', "arrowupwhite"),
    ('\u{21e8}', "arrowrightwhite"),
    ('\u{21e9}', "arrowdownwhite"),
    ('\u{21ea}', "capslock"),
    ('\u{2200}', "forall"),
    ('\u{2202}', "partialdiff"),
    ('\u{2203}', "existential"),
    ('\u{2205}', "emptyset"),
    ('\u{2206}', "Delta"),
    ('\u{2207}', "nabla"),
    ('\u{2208}', "element"),
    ('\u{2209}', "notelement"),
    ('\u{220b}', "owner"),
    ('\u{220c}', "notcontains"),
    ('\u{220f}', "product"),
    ('\u{2210}', "coproducttext"),
    ('\u{2211}', "summation"),
    ('\u{2212}', "minus"),
    ('\u{2213}', "minusplus"),
    ('\u{2215}', "slashBig"),
    ('\u{2217}', "asteriskmath"),
    ('\u{2219}', "bulletoperator"),
    ('\u{221a}', "radical"),
    ('\u{221d}', "proportional"),
    ('\u{221e}', "infinity"),
    ('\u{221f}', "orthogonal"),
    ('\u{2220}', "angle"),
    ('\u{2223}', "divides"),
    ('\u{2225}', "bardbl"),
    ('\u{2226}', "notparallel"),
    ('\u{2227}', "logicaland"),
    ('\u{2228}', "logicalor"),
    ('\u{2229}', "intersection"),
    ('\u{222a}', "union"),
    ('\u{222b}', "integral"),
    ('\u{222c}', "dblintegral"),
    ('\u{222e}', "contourintegral"),
    ('\u{2234}', "therefore"),
    ('\u{2235}', "because"),
    ('\u{2236}', "ratio"),
    ('\u{2237}', "proportion"),
    ('\u{223c}', "similar"),
    ('\u{223d}', "reversedtilde"),
    ('\u{2240}', "wreathproduct"),
    ('\u{2243}', "similarequal"),
    ('\u{2245}', "congruent"),
    ('\u{2248}', "approxequal"),
    ('\u{224c}', "allequal"),
    ('\u{224d}', "equivasymptotic"),
    ('\u{2250}', "approaches"),
    ('\u{2251}', "geometricallyequal"),
    ('\u{2252}', "approxequalorimage"),
    ('\u{2253}', "imageorapproximatelyequal"),
    ('\u{2260}', "notequal"),
    ('\u{2261}', "equivalence"),
    ('\u{2262}', "notidentical"),
    ('\u{2264}', "lessequal"),
    ('\u{2265}', "greaterequal"),
    ('\u{2266}', "lessoverequal"),
    ('\u{2267}', "greateroverequal"),
    ('\u{226a}', "lessmuch"),
    ('\u{226b}', "greatermuch"),
    ('\u{226e}', "notless"),
    ('\u{226f}', "notgreater"),
    ('\u{2270}', "notlessnorequal"),
    ('\u{2271}', "notgreaternorequal"),
    ('\u{2272}', "lessorequivalent"),
    ('\u{2273}', "greaterorequivalent"),
    ('\u{2276}', "lessorgreater"),
    ('\u{2277}', "greaterorless"),
    ('\u{2279}', "notgreaternorless"),
    ('\u{227a}', "precedes"),
    ('\u{227b}', "follows"),
    ('\u{227c}', "precedesequal"),
    ('\u{227d}', "followsequal"),
    ('\u{2280}', "notprecedes"),
    ('\u{2281}', "notsucceeds"),
    ('\u{2282}', "subset"),
    ('\u{2283}', "superset"),
    ('\u{2284}', "notsubset"),
    ('\u{2285}', "notsuperset"),
    ('\u{2286}', "reflexsubset"),
    ('\u{2287}', "reflexsuperset"),
    ('\u{228a}', "subsetnotequal"),
    ('\u{228b}', "supersetnotequal"),
    ('\u{228e}', "unionmulti"),
    ('\u{2291}', "subsetsqequal"),
    ('\u{2292}', "supersetsqequal"),
    ('\u{2293}', "intersectionsq"),
    ('\u{2294}', "unionsq"),
    ('\u{2295}', "circleplus"),
    ('\u{2296}', "circleminus"),
    ('\u{2297}', "timescircle"),
    ('\u{2298}', "circledivide"),
    ('\u{2299}', "circleot"),
    ('\u{22a2}', "turnstileleft"),
    ('\u{22a3}', "tackleft"),
    ('\u{22a4}', "tackdown"),
    ('\u{22a5}', "perpendicular"),
    ('\u{22bf}', "righttriangle"),
    ('\u{22c0}', "logicalandtext"),
    ('\u{22c1}', "logicalortext"),
    ('\u{22c2}', "intersectiontext"),
    ('\u{22c3}', "uniontext"),
    ('\u{22c4}', "diamondmath"),
    ('\u{22c5}', "dotmath"),
    ('\u{22c6}', "star"),
    ('\u{22ce}', "curlyor"),
    ('\u{22cf}', "curlyand"),
    ('\u{22da}', "lessequalorgreater"),
    ('\u{22db}', "greaterequalorless"),
    ('\u{22ee}', "ellipsisvertical"),
    ('\u{2302}', "house"),
    ('\u{2303}', "control"),
    ('\u{2305}', "projective"),
    ('\u{2308}', "ceilingleft"),
    ('\u{2309}', "ceilingright"),
    ('\u{230a}', "floorleft"),
    ('\u{230b}', "floorright"),
    ('\u{2310}', "revlogicalnot"),
    ('\u{2312}', "arc"),
    ('\u{2318}', "propellor"),
    ('\u{2320}', "integraltp"),
    ('\u{2321}', "integralbt"),
    ('\u{2322}', "slurabove"),
    ('\u{2323}', "slurbelow"),
    ('\u{2325}', "option"),
    ('\u{2326}', "deleteright"),
    ('\u{2327}', "clear"),
    ('\u{2329}', "angleleft"),
    ('\u{232a}', "angleright"),
    ('\u{232b}', "deleteleft"),
    ('\u{2423}', "blank"),
    ('\u{2460}', "onecircle"),
    ('\u{2461}', "twocircle"),
    ('\u{2462}', "threecircle"),
    ('\u{2463}', "fourcircle"),
    ('\u{2464}', "fivecircle"),
    ('\u{2465}', "sixcircle"),
    ('\u{2466}', "sevencircle"),
    ('\u{2467}', "eightcircle"),
    ('\u{2468}', "ninecircle"),
    ('\u{2469}', "tencircle"),
    ('\u{246a}', "elevencircle"),
    ('\u{246b}', "twelvecircle"),
    ('\u{246c}', "thirteencircle"),
    ('\u{246d}', "fourteencircle"),
    ('\u{246e}', "fifteencircle"),
    ('\u{246f}', "sixteencircle"),
    ('\u{2470}', "seventeencircle"),
    ('\u{2471}', "eighteencircle"),
    ('\u{2472}', "nineteencircle"),
    ('\u{2473}', "twentycircle"),
    ('\u{2474}', "oneparen"),
    ('\u{2475}', "twoparen"),
    ('\u{2476}', "threeparen"),
    ('\u{2477}', "fourparen"),
    ('\u{2478}', "fiveparen"),
    ('\u{2479}', "sixparen"),
    ('\u{247a}', "sevenparen"),
    ('\u{247b}', "eightparen"),
    ('\u{247c}', "nineparen"),
    ('\u{247d}', "tenparen"),
    ('\u{247e}', "elevenparen"),
    ('\u{247f}', "twelveparen"),
    ('\u{2480}', "thirteenparen"),
    ('\u{2481}', "fourteenparen"),
    ('\u{2482}', "fifteenparen"),
    ('\u{2483}', "sixteenparen"),
    ('\u{2484}', "seventeenparen"),
    ('\u{2485}', "eighteenparen"),
    ('\u{2486}', "nineteenparen"),
    ('\u{2487}', "twentyparen"),
    ('\u{2488}', "oneperiod"),
    ('\u{2489}', "twoperiod"),
    ('\u{248a}', "threeperiod"),
    ('\u{248b}', "fourperiod"),
    ('\u{248c}', "fiveperiod"),
    ('\u{248d}', "sixperiod"),
    ('\u{248e}', "sevenperiod"),
    ('\u{248f}', "eightperiod"),
    ('\u{2490}', "nineperiod"),
    ('\u{2491}', "tenperiod"),
    ('\u{2492}', "elevenperiod"),
    ('\u{2493}', "twelveperiod"),
    ('\u{2494}', "thirteenperiod"),
    ('\u{2495}', "fourteenperiod"),
    ('\u{2496}', "fifteenperiod"),
    ('\u{2497}', "sixteenperiod"),
    ('\u{2498}', "seventeenperiod"),
    ('\u{2499}', "eighteenperiod"),
    ('\u{249a}', "nineteenperiod"),
    ('\u{249b}', "twentyperiod"),
    ('\u{249c}', "aparen"),
    ('\u{249d}', "bparen"),
    ('\u{249e}', "cparen"),
    ('\u{249f}', "dparen"),
    ('\u{24a0}', "eparen"),
    ('\u{24a1}', "fparen"),
    ('\u{24a2}', "gparen"),
    ('\u{24a3}', "hparen"),
    ('\u{24a4}', "iparen"),
    ('\u{24a5}', "jparen"),
    ('\u{24a6}', "kparen"),
    ('\u{24a7}', "lparen"),
    ('\u{24a8}', "mparen"),
    ('\u{24a9}', "nparen"),
    ('\u{24aa}', "oparen"),
    ('\u{24ab}', "pparen"),
    ('\u{24ac}', "qparen"),
    ('\u{24ad}', "rparen"),
    ('\u{24ae}', "sparen"),
    ('\u{24af}', "tparen"),
    ('\u{24b0}', "uparen"),
    ('\u{24b1}', "vparen"),
    ('\u{24b2}', "wparen"),
    ('\u{24b3}', "xparen"),
    ('\u{24b4}', "yparen"),
    ('\u{24b5}', "zparen"),
    ('\u{24b6}', "Acircle"),
    ('\u{24b7}', "Bcircle"),
    ('\u{24b8}', "Ccircle"),
    ('\u{24b9}', "Dcircle"),
    ('\u{24ba}', "Ecircle"),
    ('\u{24bb}', "Fcircle"),
    ('\u{24bc}', "Gcircle"),
    ('\u{24bd}', "Hcircle"),
    ('\u{24be}', "Icircle"),
    ('\u{24bf}', "Jcircle"),
    ('\u{24c0}', "Kcircle"),
    ('\u{24c1}', "Lcircle"),
    ('\u{24c2}', "Mcircle"),
    ('\u{24c3}', "Ncircle"),
    ('\u{24c4}', "Ocircle"),
    ('\u{24c5}', "Pcircle"),
    ('\u{24c6}', "Qcircle"),
    ('\u{24c7}', "Rcircle"),
    ('\u{24c8}', "Scircle"),
    ('\u{24c9}', "Tcircle"),
    ('\u{24ca}', "Ucircle"),
    ('\u{24cb}', "Vcircle"),
    ('\u{24cc}', "Wcircle"),
    ('\u{24cd}', "Xcircle"),
    ('\u{24ce}', "Ycircle"),
    ('\u{24cf}', "Zcircle"),
    ('\u{24d0}', "acircle"),
    ('\u{24d1}', "bcircle"),
    ('\u{24d2}', "ccircle"),
    ('\u{24d3}', "dcircle"),
    ('\u{24d4}', "ecircle"),
    ('\u{24d5}', "fcircle"),
    ('\u{24d6}', "gcircle"),
    ('\u{24d7}', "hcircle"),
    ('\u{24d8}', "icircle"),
    ('\u{24d9}', "jcircle"),
    ('\u{24da}', "kcircle"),
    ('\u{24db}', "lcircle"),
    ('\u{24dc}', "mcircle"),
    ('\u{24dd}', "ncircle"),
    ('\u{24de}', "ocircle"),
    ('\u{24df}', "pcircle"),
    ('\u{24e0}', "qcircle"),
    ('\u{24e1}', "rcircle"),
    ('\u{24e2}', "scircle"),
    ('\u{24e3}', "tcircle"),
    ('\u{24e4}', "ucircle"),
    ('\u{24e5}', "vcircle"),
    ('\u{24e6}', "wcircle"),
    ('\u{24e7}', "xcircle"),
    ('\u{24e8}', "ycircle"),
    ('\u{24e9}', "zcircle"),
    ('\u{2500}', "SF100000"),
    ('\u{2502}', "SF110000"),
    ('\u{250c}', "SF010000"),
    ('\u{2510}', "SF030000"),
    ('\u{2514}', "SF020000"),
    ('\u{2518}', "SF040000"),
    ('\u{251c}', "SF080000"),
    ('\u{2524}', "SF090000"),
    ('\u{252c}', "SF060000"),
    ('\u{2534}', "SF070000"),
    ('\u{253c}', "SF050000"),
    ('\u{2550}', "SF430000"),
    ('\u{2551}', "SF240000"),
    ('\u{2552}', "SF510000"),
    ('\u{2553}', "SF520000"),
    ('\u{2554}', "SF390000"),
    ('\u{2555}', "SF220000"),
    ('\u{2556}', "SF210000"),
    ('\u{2557}', "SF250000"),
    ('\u{2558}', "SF500000"),
    ('\u{2559}', "SF490000"),
    ('\u{255a}', "SF380000"),
    ('\u{255b}', "SF280000"),
    ('\u{255c}', "SF270000"),
    ('\u{255d}', "SF260000"),
    ('\u{255e}', "SF360000"),
    ('\u{255f}', "SF370000"),
    ('\u{2560}', "SF420000"),
    ('\u{2561}', "SF190000"),
    ('\u{2562}', "SF200000"),
    ('\u{2563}', "SF230000"),
    ('\u{2564}', "SF470000"),
    ('\u{2565}', "SF480000"),
    ('\u{2566}', "SF410000"),
    ('\u{2567}', "SF450000"),
    ('\u{2568}', "SF460000"),
    ('\u{2569}', "SF400000"),
    ('\u{256a}', "SF540000"),
    ('\u{256b}', "SF530000"),
    ('\u{256c}', "SF440000"),
    ('\u{2580}', "upblock"),
    ('\u{2584}', "dnblock"),
    ('\u{2588}', "block"),
    ('\u{258c}', "lfblock"),
    ('\u{2590}', "rtblock"),
    ('\u{2591}', "ltshade"),
    ('\u{2592}', "shade"),
    ('\u{2593}', "dkshade"),
    ('\u{25a0}', "filledbox"),
    ('\u{25a1}', "H22073"),
    ('\u{25a3}', "squarewhitewithsmallblack"),
    ('\u{25a4}', "squarehorizontalfill"),
    ('\u{25a5}', "squareverticalfill"),
    ('\u{25a6}', "squareorthogonalcrosshatchfill"),
    ('\u{25a7}', "squareupperlefttolowerrightfill"),
    ('\u{25a8}', "squareupperrighttolowerleftfill"),
    ('\u{25a9}', "squarediagonalcrosshatchfill"),
    ('\u{25aa}', "H18543"),
    ('\u{25ab}', "H18551"),
    ('\u{25ac}', "filledrect"),
    ('\u{25b2}', "triagup"),
    ('\u{25b3}', "triangle"),
    ('\u{25b4}', "blackuppointingsmalltriangle"),
    ('\u{25b5}', "whiteuppointingsmalltriangle"),
    ('\u{25b6}', "blackrightpointingtriangle"),
    ('\u{25b7}', "whiterightpointingtriangle"),
    ('\u{25b9}', "triangleleft"),
    ('\u{25ba}', "triagrt"),
    ('\u{25bc}', "triagdn"),
    ('\u{25bd}', "triangleinv"),
    ('\u{25bf}', "whitedownpointingsmalltriangle"),
    ('\u{25c0}', "blackleftpointingtriangle"),
    ('\u{25c1}', "whiteleftpointingtriangle"),
    ('\u{25c3}', "triangleright"),
    ('\u{25c4}', "triaglf"),
    ('\u{25c6}', "blackdiamond"),
    ('\u{25c7}', "whitediamond"),
    ('\u{25c8}', "whitediamondcontainingblacksmalldiamond"),
    ('\u{25c9}', "fisheye"),
    ('\u{25ca}', "lozenge"),
    ('\u{25cb}', "circle"),
    ('\u{25cc}', "dottedcircle"),
    ('\u{25ce}', "bullseye"),
    ('\u{25cf}', "H18533"),
    ('\u{25d0}', "circlewithlefthalfblack"),
    ('\u{25d1}', "circlewithrighthalfblack"),
    ('\u{25d7}', "a81"),
    ('\u{25d8}', "invbullet"),
    ('\u{25d9}', "invcircle"),
    ('\u{25e2}', "blacklowerrighttriangle"),
    ('\u{25e3}', "blacklowerlefttriangle"),
    ('\u{25e4}', "blackupperlefttriangle"),
    ('\u{25e5}', "blackupperrighttriangle"),
    ('\u{25e6}', "openbullet"),
    ('\u{25ef}', "largecircle"),
    ('\u{2605}', "blackstar"),
    ('\u{2606}', "whitestar"),
    ('\u{260e}', "telephoneblack"),
    ('\u{260f}', "whitetelephone"),
    ('\u{261b}', "a11"),
    ('\u{261c}', "pointingindexleftwhite"),
    ('\u{261d}', "pointingindexupwhite"),
    ('\u{261e}', "pointingindexrightwhite"),
    ('\u{261f}', "pointingindexdownwhite"),
    ('\u{262f}', "yinyang"),
    ('\u{263a}', "smileface"),
    ('\u{263b}', "invsmileface"),
    ('\u{263c}', "sun"),
    ('\u{2640}', "venus"),
    ('\u{2641}', "earth"),
    ('\u{2642}', "male"),
    ('\u{2660}', "spade"),
    ('\u{2661}', "heart"),
    ('\u{2662}', "diamond"),
    ('\u{2663}', "club"),
    ('\u{2664}', "spadesuitwhite"),
    ('\u{2665}', "heart2"),
    ('\u{2666}', "diamond2"),
    ('\u{2667}', "clubsuitwhite"),
    ('\u{2668}', "hotsprings"),
    ('\u{2669}', "quarternote"),
    ('\u{266a}', "musicalnote"),
    ('\u{266b}', "musicalnotedbl"),
    ('\u{266c}', "beamedsixteenthnotes"),
    ('\u{266d}', "flat"),
    ('\u{266e}', "natural"),
    ('\u{266f}', "sharp"),
    ('\u{2701}', "a1"),
    ('\u{2702}', "a2"),
    ('\u{2703}', "a202"),
    ('\u{2704}', "a3"),
    ('\u{2706}', "a5"),
    ('\u{2707}', "a119"),
    ('\u{2708}', "a118"),
    ('\u{2709}', "a117"),
    ('\u{270c}', "a13"),
    ('\u{270d}', "a14"),
    ('\u{270e}', "a15"),
    ('\u{270f}', "a16"),
    ('\u{2710}', "a105"),
    ('\u{2711}', "a17"),
    ('\u{2712}', "a18"),
    ('\u{2713}', "checkmark"),
    ('\u{2714}', "a20"),
    ('\u{2715}', "a21"),
    ('\u{2716}', "a22"),
    ('\u{2717}', "a23"),
    ('\u{2718}', "a24"),
    ('\u{2719}', "a25"),
    ('\u{271a}', "a26"),
    ('\u{271b}', "a27"),
    ('\u{271c}', "a28"),
    ('\u{271d}', "a6"),
    ('\u{271e}', "a7"),
    ('\u{271f}', "a8"),
    ('\u{2720}', "a9"),
    ('\u{2721}', "a10"),
    ('\u{2722}', "a29"),
    ('\u{2723}', "a30"),
    ('\u{2724}', "a31"),
    ('\u{2725}', "a32"),
    ('\u{2726}', "a33"),
    ('\u{2727}', "a34"),
    ('\u{2729}', "a36"),
    ('\u{272a}', "a37"),
    ('\u{272b}', "a38"),
    ('\u{272c}', "a39"),
    ('\u{272d}', "a40"),
    ('\u{272e}', "a41"),
    ('\u{272f}', "a42"),
    ('\u{2730}', "a43"),
    ('\u{2731}', "a44"),
    ('\u{2732}', "a45"),
    ('\u{2733}', "a46"),
    ('\u{2734}', "a47"),
    ('\u{2735}', "a48"),
    ('\u{2736}', "a49"),
    ('\u{2737}', "a50"),
    ('\u{2738}', "a51"),
    ('\u{2739}', "a52"),
    ('\u{273a}', "a53"),
    ('\u{273b}', "a54"),
    ('\u{273c}', "a55"),
    ('\u{273d}', "a56"),
    ('\u{273e}', "a57"),
    ('\u{273f}', "a58"),
    ('\u{2740}', "a59"),
    ('\u{2741}', "a60"),
    ('\u{2742}', "a61"),
    ('\u{2743}', "a62"),
    ('\u{2744}', "a63"),
    ('\u{2745}', "a64"),
    ('\u{2746}', "a65"),
    ('\u{2747}', "a66"),
    ('\u{2748}', "a67"),
    ('\u{2749}', "a68"),
    ('\u{274a}', "a69"),
    ('\u{274b}', "a70"),
    ('\u{274d}', "a72"),
    ('\u{274f}', "a74"),
    ('\u{2750}', "a203"),
    ('\u{2751}', "a75"),
    ('\u{2752}', "a204"),
    ('\u{2756}', "a79"),
    ('\u{2758}', "a82"),
    ('\u{2759}', "a83"),
    ('\u{275a}', "a84"),
    ('\u{275b}', "a97"),
    ('\u{275c}', "a98"),
    ('\u{275d}', "a99"),
    ('\u{275e}', "a100"),
    ('\u{2761}', "a101"),
    ('\u{2762}', "a102"),
    ('\u{2763}', "a103"),
    ('\u{2764}', "a104"),
    ('\u{2765}', "a106"),
    ('\u{2766}', "a107"),
    ('\u{2767}', "a108"),
    ('\u{2776}', "a130"),
    ('\u{2777}', "a131"),
    ('\u{2778}', "a132"),
    ('\u{2779}', "a133"),
    ('\u{277a}', "a134"),
    ('\u{277b}', "a135"),
    ('\u{277c}', "a136"),
    ('\u{277d}', "a137"),
    ('\u{277e}', "a138"),
    ('\u{277f}', "a139"),
    ('\u{2780}', "a140"),
    ('\u{2781}', "a141"),
    ('\u{2782}', "a142"),
    ('\u{2783}', "a143"),
    ('\u{2784}', "a144"),
    ('\u{2785}', "a145"),
    ('\u{2786}', "a146"),
    ('\u{2787}', "a147"),
    ('\u{2788}', "a148"),
    ('\u{2789}', "a149"),
    ('\u{278a}', "onecircleinversesansserif"),
    ('\u{278b}', "twocircleinversesansserif"),
    ('\u{278c}', "threecircleinversesansserif"),
    ('\u{278d}', "fourcircleinversesansserif"),
    ('\u{278e}', "fivecircleinversesansserif"),
    ('\u{278f}', "sixcircleinversesansserif"),
    ('\u{2790}', "sevencircleinversesansserif"),
    ('\u{2791}', "eightcircleinversesansserif"),
    ('\u{2792}', "ninecircleinversesansserif"),
    ('\u{2793}', "a159"),
    ('\u{2794}', "a160"),
    ('\u{2798}', "a196"),
    ('\u{2799}', "a165"),
    ('\u{279a}', "a192"),
    ('\u{279b}', "a166"),
    ('\u{279c}', "a167"),
    ('\u{279d}', "a168"),
    ('\u{279e}', "arrowrightheavy"),
    ('\u{279f}', "a170"),
    ('\u{27a0}', "a171"),
    ('\u{27a1}', "a172"),
    ('\u{27a2}', "a173"),
    ('\u{27a3}', "a162"),
    ('\u{27a4}', "a174"),
    ('\u{27a5}', "a175"),
    ('\u{27a6}', "a176"),
    ('\u{27a7}', "a177"),
    ('\u{27a8}', "a178"),
    ('\u{27a9}', "a179"),
    ('\u{27aa}', "a193"),
    ('\u{27ab}', "a180"),
    ('\u{27ac}', "a199"),
    ('\u{27ad}', "a181"),
    ('\u{27ae}', "a200"),
    ('\u{27af}', "a182"),
    ('\u{27b1}', "a201"),
    ('\u{27b2}', "a183"),
    ('\u{27b3}', "a184"),
    ('\u{27b4}', "a197"),
    ('\u{27b5}', "a185"),
    ('\u{27b6}', "a194"),
    ('\u{27b7}', "a198"),
    ('\u{27b8}', "a186"),
    ('\u{27b9}', "a195"),
    ('\u{27ba}', "a187"),
    ('\u{27bb}', "a188"),
    ('\u{27bc}', "a189"),
    ('\u{27bd}', "a190"),
    ('\u{27be}', "a191"),
    ('\u{27e6}', "dblbracketleft"),
    ('\u{27e7}', "dblbracketright"),
    ('\u{27e8}', "angbracketleft"),
    ('\u{27e9}', "angbracketright"),
    ('\u{2a3f}', "coproduct"),
    ('\u{3000}', "ideographicspace"),
    ('\u{3001}', "ideographiccomma"),
    ('\u{3002}', "ideographicperiod"),
    ('\u{3003}', "dittomark"),
    ('\u{3004}', "jis"),
    ('\u{3005}', "ideographiciterationmark"),
    ('\u{3006}', "ideographicclose"),
    ('\u{3007}', "ideographiczero"),
    ('\u{3008}', "anglebracketleft"),
    ('\u{3009}', "anglebracketright"),
    ('\u{300a}', "dblanglebracketleft"),
    ('\u{300b}', "dblanglebracketright"),
    ('\u{300c}', "cornerbracketleft"),
    ('\u{300d}', "cornerbracketright"),
    ('\u{300e}', "whitecornerbracketleft"),
    ('\u{300f}', "whitecornerbracketright"),
    ('\u{3010}', "blacklenticularbracketleft"),
    ('\u{3011}', "blacklenticularbracketright"),
    ('\u{3012}', "postalmark"),
    ('\u{3013}', "getamark"),
    ('\u{3014}', "tortoiseshellbracketleft"),
    ('\u{3015}', "tortoiseshellbracketright"),
    ('\u{3016}', "whitelenticularbracketleft"),
    ('\u{3017}', "whitelenticularbracketright"),
    ('\u{3018}', "whitetortoiseshellbracketleft"),
    ('\u{3019}', "whitetortoiseshellbracketright"),
    ('\u{301c}', "wavedash"),
    ('\u{301d}', "quotedblprimereversed"),
    ('\u{301e}', "quotedblprime"),
    ('\u{3020}', "postalmarkface"),
    ('\u{3021}', "onehangzhou"),
    ('\u{3022}', "twohangzhou"),
    ('\u{3023}', "threehangzhou"),
    ('\u{3024}', "fourhangzhou"),
    ('\u{3025}', "fivehangzhou"),
    ('\u{3026}', "sixhangzhou"),
    ('\u{3027}', "sevenhangzhou"),
    ('\u{3028}', "eighthangzhou"),
    ('\u{3029}', "ninehangzhou"),
    ('\u{3036}', "circlepostalmark"),
    ('\u{3041}', "asmallhiragana"),
    ('\u{3042}', "ahiragana"),
    ('\u{3043}', "ismallhiragana"),
    ('\u{3044}', "ihiragana"),
    ('\u{3045}', "usmallhiragana"),
    ('\u{3046}', "uhiragana"),
    ('\u{3047}', "esmallhiragana"),
    ('\u{3048}', "ehiragana"),
    ('\u{3049}', "osmallhiragana"),
    ('\u{304a}', "ohiragana"),
    ('\u{304b}', "kahiragana"),
    ('\u{304c}', "gahiragana"),
    ('\u{304d}', "kihiragana"),
    ('\u{304e}', "gihiragana"),
    ('\u{304f}', "kuhiragana"),
    ('\u{3050}', "guhiragana"),
    ('\u{3051}', "kehiragana"),
    ('\u{3052}', "gehiragana"),
    ('\u{3053}', "kohiragana"),
    ('\u{3054}', "gohiragana"),
    ('\u{3055}', "sahiragana"),
    ('\u{3056}', "zahiragana"),
    ('\u{3057}', "sihiragana"),
    ('\u{3058}', "zihiragana"),
    ('\u{3059}', "suhiragana"),
    ('\u{305a}', "zuhiragana"),
    ('\u{305b}', "sehiragana"),
    ('\u{305c}', "zehiragana"),
    ('\u{305d}', "sohiragana"),
    ('\u{305e}', "zohiragana"),
    ('\u{305f}', "tahiragana"),
    ('\u{3060}', "dahiragana"),
    ('\u{3061}', "tihiragana"),
    ('\u{3062}', "dihiragana"),
    ('\u{3063}', "tusmallhiragana"),
    ('\u{3064}', "tuhiragana"),
    ('\u{3065}', "duhiragana"),
    ('\u{3066}', "tehiragana"),
    ('\u{3067}', "dehiragana"),
    ('\u{3068}', "tohiragana"),
    ('\u{3069}', "dohiragana"),
    ('\u{306a}', "nahiragana"),
    ('\u{306b}', "nihiragana"),
    ('\u{306c}', "nuhiragana"),
    ('\u{306d}', "nehiragana"),
    ('\u{306e}', "nohiragana"),
    ('\u{306f}', "hahiragana"),
    ('\u{3070}', "bahiragana"),
    ('\u{3071}', "pahiragana"),
    ('\u{3072}', "hihiragana"),
    ('\u{3073}', "bihiragana"),
    ('\u{3074}', "pihiragana"),
    ('\u{3075}', "huhiragana"),
    ('\u{3076}', "buhiragana"),
    ('\u{3077}', "puhiragana"),
    ('\u{3078}', "hehiragana"),
    ('\u{3079}', "behiragana"),
    ('\u{307a}', "pehiragana"),
    ('\u{307b}', "hohiragana"),
    ('\u{307c}', "bohiragana"),
    ('\u{307d}', "pohiragana"),
    ('\u{307e}', "mahiragana"),
    ('\u{307f}', "mihiragana"),
    ('\u{3080}', "muhiragana"),
    ('\u{3081}', "mehiragana"),
    ('\u{3082}', "mohiragana"),
    ('\u{3083}', "yasmallhiragana"),
    ('\u{3084}', "yahiragana"),
    ('\u{3085}', "yusmallhiragana"),
    ('\u{3086}', "yuhiragana"),
    ('\u{3087}', "yosmallhiragana"),
    ('\u{3088}', "yohiragana"),
    ('\u{3089}', "rahiragana"),
    ('\u{308a}', "rihiragana"),
    ('\u{308b}', "ruhiragana"),
    ('\u{308c}', "rehiragana"),
    ('\u{308d}', "rohiragana"),
    ('\u{308e}', "wasmallhiragana"),
    ('\u{308f}', "wahiragana"),
    ('\u{3090}', "wihiragana"),
    ('\u{3091}', "wehiragana"),
    ('\u{3092}', "wohiragana"),
    ('\u{3093}', "nhiragana"),
    ('\u{3094}', "vuhiragana"),
    ('\u{309b}', "voicedmarkkana"),
    ('\u{309c}', "semivoicedmarkkana"),
    ('\u{309d}', "iterationhiragana"),
    ('\u{309e}', "voicediterationhiragana"),
    ('\u{30a1}', "asmallkatakana"),
    ('\u{30a2}', "akatakana"),
    ('\u{30a3}', "ismallkatakana"),
    ('\u{30a4}', "ikatakana"),
    ('\u{30a5}', "usmallkatakana"),
    ('\u{30a6}', "ukatakana"),
    ('\u{30a7}', "esmallkatakana"),
    ('\u{30a8}', "ekatakana"),
    ('\u{30a9}', "osmallkatakana"),
    ('\u{30aa}', "okatakana"),
    ('\u{30ab}', "kakatakana"),
    ('\u{30ac}', "gakatakana"),
    ('\u{30ad}', "kikatakana"),
    ('\u{30ae}', "gikatakana"),
    ('\u{30af}', "kukatakana"),
    ('\u{30b0}', "gukatakana"),
    ('\u{30b1}', "kekatakana"),
    ('\u{30b2}', "gekatakana"),
    ('\u{30b3}', "kokatakana"),
    ('\u{30b4}', "gokatakana"),
    ('\u{30b5}', "sakatakana"),
    ('\u{30b6}', "zakatakana"),
    ('\u{30b7}', "sikatakana"),
    ('\u{30b8}', "zikatakana"),
    ('\u{30b9}', "sukatakana"),
    ('\u{30ba}', "zukatakana"),
    ('\u{30bb}', "sekatakana"),
    ('\u{30bc}', "zekatakana"),
    ('\u{30bd}', "sokatakana"),
    ('\u{30be}', "zokatakana"),
    ('\u{30bf}', "takatakana"),
    ('\u{30c0}', "dakatakana"),
    ('\u{30c1}', "tikatakana"),
    ('\u{30c2}', "dikatakana"),
    ('\u{30c3}', "tusmallkatakana"),
    ('\u{30c4}', "tukatakana"),
    ('\u{30c5}', "dukatakana"),
    ('\u{30c6}', "tekatakana"),
    ('\u{30c7}', "dekatakana"),
    ('\u{30c8}', "tokatakana"),
    ('\u{30c9}', "dokatakana"),
    ('\u{30ca}', "nakatakana"),
    ('\u{30cb}', "nikatakana"),
    ('\u{30cc}', "nukatakana"),
    ('\u{30cd}', "nekatakana"),
    ('\u{30ce}', "nokatakana"),
    ('\u{30cf}', "hakatakana"),
    ('\u{30d0}', "bakatakana"),
    ('\u{30d1}', "pakatakana"),
    ('\u{30d2}', "hikatakana"),
    ('\u{30d3}', "bikatakana"),
    ('\u{30d4}', "pikatakana"),
    ('\u{30d5}', "hukatakana"),
    ('\u{30d6}', "bukatakana"),
    ('\u{30d7}', "pukatakana"),
    ('\u{30d8}', "hekatakana"),
    ('\u{30d9}', "bekatakana"),
    ('\u{30da}', "pekatakana"),
    ('\u{30db}', "hokatakana"),
    ('\u{30dc}', "bokatakana"),
    ('\u{30dd}', "pokatakana"),
    ('\u{30de}', "makatakana"),
    ('\u{30df}', "mikatakana"),
    ('\u{30e0}', "mukatakana"),
    ('\u{30e1}', "mekatakana"),
    ('\u{30e2}', "mokatakana"),
    ('\u{30e3}', "yasmallkatakana"),
    ('\u{30e4}', "yakatakana"),
    ('\u{30e5}', "yusmallkatakana"),
    ('\u{30e6}', "yukatakana"),
    ('\u{30e7}', "yosmallkatakana"),
    ('\u{30e8}', "yokatakana"),
    ('\u{30e9}', "rakatakana"),
    ('\u{30ea}', "rikatakana"),
    ('\u{30eb}', "rukatakana"),
    ('\u{30ec}', "rekatakana"),
    ('\u{30ed}', "rokatakana"),
    ('\u{30ee}', "wasmallkatakana"),
    ('\u{30ef}', "wakatakana"),
    ('\u{30f0}', "wikatakana"),
    ('\u{30f1}', "wekatakana"),
    ('\u{30f2}', "wokatakana"),
    ('\u{30f3}', "nkatakana"),
    ('\u{30f4}', "vukatakana"),
    ('\u{30f5}', "kasmallkatakana"),
    ('\u{30f6}', "kesmallkatakana"),
    ('\u{30f7}', "vakatakana"),
    ('\u{30f8}', "vikatakana"),
    ('\u{30f9}', "vekatakana"),
    ('\u{30fa}', "vokatakana"),
    ('\u{30fb}', "dotkatakana"),
    ('\u{30fc}', "prolongedkana"),
    ('\u{30fd}', "iterationkatakana"),
    ('\u{30fe}', "voicediterationkatakana"),
    ('\u{3105}', "bbopomofo"),
    ('\u{3106}', "pbopomofo"),
    ('\u{3107}', "mbopomofo"),
    ('\u{3108}', "fbopomofo"),
    ('\u{3109}', "dbopomofo"),
    ('\u{310a}', "tbopomofo"),
    ('\u{310b}', "nbopomofo"),
    ('\u{310c}', "lbopomofo"),
    ('\u{310d}', "gbopomofo"),
    ('\u{310e}', "kbopomofo"),
    ('\u{310f}', "hbopomofo"),
    ('\u{3110}', "jbopomofo"),
    ('\u{3111}', "qbopomofo"),
    ('\u{3112}', "xbopomofo"),
    ('\u{3113}', "zhbopomofo"),
    ('\u{3114}', "chbopomofo"),
    ('\u{3115}', "shbopomofo"),
    ('\u{3116}', "rbopomofo"),
    ('\u{3117}', "zbopomofo"),
    ('\u{3118}', "cbopomofo"),
    ('\u{3119}', "sbopomofo"),
    ('\u{311a}', "abopomofo"),
    ('\u{311b}', "obopomofo"),
    ('\u{311c}', "ebopomofo"),
    ('\u{311d}', "ehbopomofo"),
    ('\u{311e}', "aibopomofo"),
    ('\u{311f}', "eibopomofo"),
    ('\u{3120}', "aubopomofo"),
    ('\u{3121}', "oubopomofo"),
    ('\u{3122}', "anbopomofo"),
    ('\u{3123}', "enbopomofo"),
    ('\u{3124}', "angbopomofo"),
    ('\u{3125}', "engbopomofo"),
    ('\u{3126}', "erbopomofo"),
    ('\u{3127}', "ibopomofo"),
    ('\u{3128}', "ubopomofo"),
    ('\u{3129}', "iubopomofo"),
    ('\u{3131}', "kiyeokkorean"),
    ('\u{3132}', "ssangkiyeokkorean"),
    ('\u{3133}', "kiyeoksioskorean"),
    ('\u{3134}', "nieunkorean"),
    ('\u{3135}', "nieuncieuckorean"),
    ('\u{3136}', "nieunhieuhkorean"),
    ('\u{3137}', "tikeutkorean"),
    ('\u{3138}', "ssangtikeutkorean"),
    ('\u{3139}', "rieulkorean"),
    ('\u{313a}', "rieulkiyeokkorean"),
    ('\u{313b}', "rieulmieumkorean"),
    ('\u{313c}', "rieulpieupkorean"),
    ('\u{313d}', "rieulsioskorean"),
    ('\u{313e}', "rieulthieuthkorean"),
    ('\u{313f}', "rieulphieuphkorean"),
    ('\u{3140}', "rieulhieuhkorean"),
    ('\u{3141}', "mieumkorean"),
    ('\u{3142}', "pieupkorean"),
    ('\u{3143}', "ssangpieupkorean"),
    ('\u{3144}', "pieupsioskorean"),
    ('\u{3145}', "sioskorean"),
    ('\u{3146}', "ssangsioskorean"),
    ('\u{3147}', "ieungkorean"),
    ('\u{3148}', "cieuckorean"),
    ('\u{3149}', "ssangcieuckorean"),
    ('\u{314a}', "chieuchkorean"),
    ('\u{314b}', "khieukhkorean"),
    ('\u{314c}', "thieuthkorean"),
    ('\u{314d}', "phieuphkorean"),
    ('\u{314e}', "hieuhkorean"),
    ('\u{314f}', "akorean"),
    ('\u{3150}', "aekorean"),
    ('\u{3151}', "yakorean"),
    ('\u{3152}', "yaekorean"),
    ('\u{3153}', "eokorean"),
    ('\u{3154}', "ekorean"),
    ('\u{3155}', "yeokorean"),
    ('\u{3156}', "yekorean"),
    ('\u{3157}', "okorean"),
    ('\u{3158}', "wakorean"),
    ('\u{3159}', "waekorean"),
    ('\u{315a}', "oekorean"),
    ('\u{315b}', "yokorean"),
    ('\u{315c}', "ukorean"),
    ('\u{315d}', "weokorean"),
    ('\u{315e}', "wekorean"),
    ('\u{315f}', "wikorean"),
    ('\u{3160}', "yukorean"),
    ('\u{3161}', "eukorean"),
    ('\u{3162}', "yikorean"),
    ('\u{3163}', "ikorean"),
    ('\u{3164}', "hangulfiller"),
    ('\u{3165}', "ssangnieunkorean"),
    ('\u{3166}', "nieuntikeutkorean"),
    ('\u{3167}', "nieunsioskorean"),
    ('\u{3168}', "nieunpansioskorean"),
    ('\u{3169}', "rieulkiyeoksioskorean"),
    ('\u{316a}', "rieultikeutkorean"),
    ('\u{316b}', "rieulpieupsioskorean"),
    ('\u{316c}', "rieulpansioskorean"),
    ('\u{316d}', "rieulyeorinhieuhkorean"),
    ('\u{316e}', "mieumpieupkorean"),
    ('\u{316f}', "mieumsioskorean"),
    ('\u{3170}', "mieumpansioskorean"),
    ('\u{3171}', "kapyeounmieumkorean"),
    ('\u{3172}', "pieupkiyeokkorean"),
    ('\u{3173}', "pieuptikeutkorean"),
    ('\u{3174}', "pieupsioskiyeokkorean"),
    ('\u{3175}', "pieupsiostikeutkorean"),
    ('\u{3176}', "pieupcieuckorean"),
    ('\u{3177}', "pieupthieuthkorean"),
    ('\u{3178}', "kapyeounpieupkorean"),
    ('\u{3179}', "kapyeounssangpieupkorean"),
    ('\u{317a}', "sioskiyeokkorean"),
    ('\u{317b}', "siosnieunkorean"),
    ('\u{317c}', "siostikeutkorean"),
    ('\u{317d}', "siospieupkorean"),
    ('\u{317e}', "sioscieuckorean"),
    ('\u{317f}', "pansioskorean"),
    ('\u{3180}', "ssangieungkorean"),
    ('\u{3181}', "yesieungkorean"),
    ('\u{3182}', "yesieungsioskorean"),
    ('\u{3183}', "yesieungpansioskorean"),
    ('\u{3184}', "kapyeounphieuphkorean"),
    ('\u{3185}', "ssanghieuhkorean"),
    ('\u{3186}', "yeorinhieuhkorean"),
    ('\u{3187}', "yoyakorean"),
    ('\u{3188}', "yoyaekorean"),
    ('\u{3189}', "yoikorean"),
    ('\u{318a}', "yuyeokorean"),
    ('\u{318b}', "yuyekorean"),
    ('\u{318c}', "yuikorean"),
    ('\u{318d}', "araeakorean"),
    ('\u{318e}', "araeaekorean"),
    ('\u{3200}', "kiyeokparenkorean"),
    ('\u{3201}', "nieunparenkorean"),
    ('\u{3202}', "tikeutparenkorean"),
    ('\u{3203}', "rieulparenkorean"),
    ('\u{3204}', "mieumparenkorean"),
    ('\u{3205}', "pieupparenkorean"),
    ('\u{3206}', "siosparenkorean"),
    ('\u{3207}', "ieungparenkorean"),
    ('\u{3208}', "cieucparenkorean"),
    ('\u{3209}', "chieuchparenkorean"),
    ('\u{320a}', "khieukhparenkorean"),
    ('\u{320b}', "thieuthparenkorean"),
    ('\u{320c}', "phieuphparenkorean"),
    ('\u{320d}', "hieuhparenkorean"),
    ('\u{320e}', "kiyeokaparenkorean"),
    ('\u{320f}', "nieunaparenkorean"),
    ('\u{3210}', "tikeutaparenkorean"),
    ('\u{3211}', "rieulaparenkorean"),
    ('\u{3212}', "mieumaparenkorean"),
    ('\u{3213}', "pieupaparenkorean"),
    ('\u{3214}', "siosaparenkorean"),
    ('\u{3215}', "ieungaparenkorean"),
    ('\u{3216}', "cieucaparenkorean"),
    ('\u{3217}', "chieuchaparenkorean"),
    ('\u{3218}', "khieukhaparenkorean"),
    ('\u{3219}', "thieuthaparenkorean"),
    ('\u{321a}', "phieuphaparenkorean"),
    ('\u{321b}', "hieuhaparenkorean"),
    ('\u{321c}', "cieucuparenkorean"),
    ('\u{3220}', "oneideographicparen"),
    ('\u{3221}', "twoideographicparen"),
    ('\u{3222}', "threeideographicparen"),
    ('\u{3223}', "fourideographicparen"),
    ('\u{3224}', "fiveideographicparen"),
    ('\u{3225}', "sixideographicparen"),
    ('\u{3226}', "sevenideographicparen"),
    ('\u{3227}', "eightideographicparen"),
    ('\u{3228}', "nineideographicparen"),
    ('\u{3229}', "tenideographicparen"),
    ('\u{322a}', "ideographicmoonparen"),
    ('\u{322b}', "ideographicfireparen"),
    ('\u{322c}', "ideographicwaterparen"),
    ('\u{322d}', "ideographicwoodparen"),
    ('\u{322e}', "ideographicmetalparen"),
    ('\u{322f}', "ideographicearthparen"),
    ('\u{3230}', "ideographicsunparen"),
    ('\u{3231}', "ideographicstockparen"),
    ('\u{3232}', "ideographichaveparen"),
    ('\u{3233}', "ideographicsocietyparen"),
    ('\u{3234}', "ideographicnameparen"),
    ('\u{3235}', "ideographicspecialparen"),
    ('\u{3236}', "ideographicfinancialparen"),
    ('\u{3237}', "ideographiccongratulationparen"),
    ('\u{3238}', "ideographiclaborparen"),
    ('\u{3239}', "ideographicrepresentparen"),
    ('\u{323a}', "ideographiccallparen"),
    ('\u{323b}', "ideographicstudyparen"),
    ('\u{323c}', "ideographicsuperviseparen"),
    ('\u{323d}', "ideographicenterpriseparen"),
    ('\u{323e}', "ideographicresourceparen"),
    ('\u{323f}', "ideographicallianceparen"),
    ('\u{3240}', "ideographicfestivalparen"),
    ('\u{3242}', "ideographicselfparen"),
    ('\u{3243}', "ideographicreachparen"),
    ('\u{3260}', "kiyeokcirclekorean"),
    ('\u{3261}', "nieuncirclekorean"),
    ('\u{3262}', "tikeutcirclekorean"),
    ('\u{3263}', "rieulcirclekorean"),
    ('\u{3264}', "mieumcirclekorean"),
    ('\u{3265}', "pieupcirclekorean"),
    ('\u{3266}', "sioscirclekorean"),
    ('\u{3267}', "ieungcirclekorean"),
    ('\u{3268}', "cieuccirclekorean"),
    ('\u{3269}', "chieuchcirclekorean"),
    ('\u{326a}', "khieukhcirclekorean"),
    ('\u{326b}', "thieuthcirclekorean"),
    ('\u{326c}', "phieuphcirclekorean"),
    ('\u{326d}', "hieuhcirclekorean"),
    ('\u{326e}', "kiyeokacirclekorean"),
    ('\u{326f}', "nieunacirclekorean"),
    ('\u{3270}', "tikeutacirclekorean"),
    ('\u{3271}', "rieulacirclekorean"),
    ('\u{3272}', "mieumacirclekorean"),
    ('\u{3273}', "pieupacirclekorean"),
    ('\u{3274}', "siosacirclekorean"),
    ('\u{3275}', "ieungacirclekorean"),
    ('\u{3276}', "cieucacirclekorean"),
    ('\u{3277}', "chieuchacirclekorean"),
    ('\u{3278}', "khieukhacirclekorean"),
    ('\u{3279}', "thieuthacirclekorean"),
    ('\u{327a}', "phieuphacirclekorean"),
    ('\u{327b}', "hieuhacirclekorean"),
    ('\u{327f}', "koreanstandardsymbol"),
    ('\u{328a}', "ideographmooncircle"),
    ('\u{328b}', "ideographfirecircle"),
    ('\u{328c}', "ideographwatercircle"),
    ('\u{328d}', "ideographwoodcircle"),
    ('\u{328e}', "ideographmetalcircle"),
    ('\u{328f}', "ideographearthcircle"),
    ('\u{3290}', "ideographsuncircle"),
    ('\u{3294}', "ideographnamecircle"),
    ('\u{3296}', "ideographicfinancialcircle"),
    ('\u{3298}', "ideographiclaborcircle"),
    ('\u{3299}', "ideographicsecretcircle"),
    ('\u{329d}', "ideographicexcellentcircle"),
    ('\u{329e}', "ideographicprintcircle"),
    ('\u{32a3}', "ideographiccorrectcircle"),
    ('\u{32a4}', "ideographichighcircle"),
    ('\u{32a5}', "ideographiccentrecircle"),
    ('\u{32a6}', "ideographiclowcircle"),
    ('\u{32a7}', "ideographicleftcircle"),
    ('\u{32a8}', "ideographicrightcircle"),
    ('\u{32a9}', "ideographicmedicinecircle"),
    ('\u{3300}', "apaatosquare"),
    ('\u{3303}', "aarusquare"),
    ('\u{3305}', "intisquare"),
    ('\u{330d}', "karoriisquare"),
    ('\u{3314}', "kirosquare"),
    ('\u{3315}', "kiroguramusquare"),
    ('\u{3316}', "kiromeetorusquare"),
    ('\u{3318}', "guramusquare"),
    ('\u{331e}', "kooposquare"),
    ('\u{3322}', "sentisquare"),
    ('\u{3323}', "sentosquare"),
    ('\u{3326}', "dorusquare"),
    ('\u{3327}', "tonsquare"),
    ('\u{332a}', "haitusquare"),
    ('\u{332b}', "paasentosquare"),
    ('\u{3331}', "birusquare"),
    ('\u{3333}', "huiitosquare"),
    ('\u{3336}', "hekutaarusquare"),
    ('\u{3339}', "herutusquare"),
    ('\u{333b}', "peezisquare"),
    ('\u{3342}', "hoonsquare"),
    ('\u{3347}', "mansyonsquare"),
    ('\u{3349}', "mirisquare"),
    ('\u{334a}', "miribaarusquare"),
    ('\u{334d}', "meetorusquare"),
    ('\u{334e}', "yaadosquare"),
    ('\u{3351}', "rittorusquare"),
    ('\u{3357}', "wattosquare"),
    ('\u{337b}', "heiseierasquare"),
    ('\u{337c}', "syouwaerasquare"),
    ('\u{337d}', "taisyouerasquare"),
    ('\u{337e}', "meizierasquare"),
    ('\u{337f}', "corporationsquare"),
    ('\u{3380}', "paampssquare"),
    ('\u{3381}', "nasquare"),
    ('\u{3382}', "muasquare"),
    ('\u{3383}', "masquare"),
    ('\u{3384}', "kasquare"),
    ('\u{3385}', "KBsquare"),
    ('\u{3386}', "MBsquare"),
    ('\u{3387}', "GBsquare"),
    ('\u{3388}', "calsquare"),
    ('\u{3389}', "kcalsquare"),
    ('\u{338a}', "pfsquare"),
    ('\u{338b}', "nfsquare"),
    ('\u{338c}', "mufsquare"),
    ('\u{338d}', "mugsquare"),
    ('\u{338e}', "squaremg"),
    ('\u{338f}', "squarekg"),
    ('\u{3390}', "Hzsquare"),
    ('\u{3391}', "khzsquare"),
    ('\u{3392}', "mhzsquare"),
    ('\u{3393}', "ghzsquare"),
    ('\u{3394}', "thzsquare"),
    ('\u{3395}', "mulsquare"),
    ('\u{3396}', "mlsquare"),
    ('\u{3397}', "dlsquare"),
    ('\u{3398}', "klsquare"),
    ('\u{3399}', "fmsquare"),
    ('\u{339a}', "nmsquare"),
    ('\u{339b}', "mumsquare"),
    ('\u{339c}', "squaremm"),
    ('\u{339d}', "squarecm"),
    ('\u{339e}', "squarekm"),
    ('\u{339f}', "mmsquaredsquare"),
    ('\u{33a0}', "cmsquaredsquare"),
    ('\u{33a1}', "squaremsquared"),
    ('\u{33a2}', "kmsquaredsquare"),
    ('\u{33a3}', "mmcubedsquare"),
    ('\u{33a4}', "cmcubedsquare"),
    ('\u{33a5}', "mcubedsquare"),
    ('\u{33a6}', "kmcubedsquare"),
    ('\u{33a7}', "moverssquare"),
    ('\u{33a8}', "moverssquaredsquare"),
    ('\u{33a9}', "pasquare"),
    ('\u{33aa}', "kpasquare"),
    ('\u{33ab}', "mpasquare"),
    ('\u{33ac}', "gpasquare"),
    ('\u{33ad}', "radsquare"),
    ('\u{33ae}', "radoverssquare"),
    ('\u{33af}', "radoverssquaredsquare"),
    ('\u{33b0}', "pssquare"),
    ('\u{33b1}', "nssquare"),
    ('\u{33b2}', "mussquare"),
    ('\u{33b3}', "mssquare"),
    ('\u{33b4}', "pvsquare"),
    ('\u{33b5}', "nvsquare"),
    ('\u{33b6}', "muvsquare"),
    ('\u{33b7}', "mvsquare"),
    ('\u{33b8}', "kvsquare"),
    ('\u{33b9}', "mvmegasquare"),
    ('\u{33ba}', "pwsquare"),
    ('\u{33bb}', "nwsquare"),
    ('\u{33bc}', "muwsquare"),
    ('\u{33bd}', "mwsquare"),
    ('\u{33be}', "kwsquare"),
    ('\u{33bf}', "mwmegasquare"),
    ('\u{33c0}', "kohmsquare"),
    ('\u{33c1}', "mohmsquare"),
    ('\u{33c2}', "amsquare"),
    ('\u{33c3}', "bqsquare"),
    ('\u{33c4}', "squarecc"),
    ('\u{33c5}', "cdsquare"),
    ('\u{33c6}', "coverkgsquare"),
    ('\u{33c7}', "cosquare"),
    ('\u{33c8}', "dbsquare"),
    ('\u{33c9}', "gysquare"),
    ('\u{33ca}', "hasquare"),
    ('\u{33cb}', "HPsquare"),
    ('\u{33cd}', "KKsquare"),
    ('\u{33ce}', "squarekmcapital"),
    ('\u{33cf}', "ktsquare"),
    ('\u{33d0}', "lmsquare"),
    ('\u{33d1}', "squareln"),
    ('\u{33d2}', "squarelog"),
    ('\u{33d3}', "lxsquare"),
    ('\u{33d4}', "mbsquare"),
    ('\u{33d5}', "squaremil"),
    ('\u{33d6}', "molsquare"),
    ('\u{33d8}', "pmsquare"),
    ('\u{33db}', "srsquare"),
    ('\u{33dc}', "svsquare"),
    ('\u{33dd}', "wbsquare"),
    ('\u{5344}', "twentyhangzhou"),
    ('\u{f6be}', "dotlessj2"),
    ('\u{f6bf}', "LL"),
    ('\u{f6c0}', "ll"),
    ('\u{f6c3}', "commaaccent"),
    ('\u{f6c4}', "afii10063"),
    ('\u{f6c5}', "afii10064"),
    ('\u{f6c6}', "afii10192"),
    ('\u{f6c7}', "afii10831"),
    ('\u{f6c8}', "afii10832"),
    ('\u{f6c9}', "Acute"),
    ('\u{f6ca}', "Caron"),
    ('\u{f6cb}', "Dieresis"),
    ('\u{f6cc}', "DieresisAcute"),
    ('\u{f6cd}', "DieresisGrave"),
    ('\u{f6ce}', "Grave"),
    ('\u{f6cf}', "Hungarumlaut"),
    ('\u{f6d0}', "Macron"),
    ('\u{f6d1}', "cyrBreve"),
    ('\u{f6d2}', "cyrFlex"),
    ('\u{f6d3}', "dblGrave"),
    ('\u{f6d4}', "cyrbreve"),
    ('\u{f6d5}', "cyrflex"),
    ('\u{f6d6}', "dblgrave"),
    ('\u{f6d7}', "dieresisacute"),
    ('\u{f6d8}', "dieresisgrave"),
    ('\u{f6d9}', "copyrightserif"),
    ('\u{f6da}', "registerserif"),
    ('\u{f6db}', "trademarkserif"),
    ('\u{f6dc}', "onefitted"),
    ('\u{f6dd}', "rupiah"),
    ('\u{f6de}', "threequartersemdash"),
    ('\u{f6df}', "centinferior"),
    ('\u{f6e0}', "centsuperior"),
    ('\u{f6e1}', "commainferior"),
    ('\u{f6e2}', "commasuperior"),
    ('\u{f6e3}', "dollarinferior"),
    ('\u{f6e4}', "dollarsuperior"),
    ('\u{f6e5}', "hypheninferior"),
    ('\u{f6e6}', "hyphensuperior"),
    ('\u{f6e7}', "periodinferior"),
    ('\u{f6e8}', "periodsuperior"),
    ('\u{f6e9}', "asuperior"),
    ('\u{f6ea}', "bsuperior"),
    ('\u{f6eb}', "dsuperior"),
    ('\u{f6ec}', "esuperior"),
    ('\u{f6ed}', "isuperior"),
    ('\u{f6ee}', "lsuperior"),
    ('\u{f6ef}', "msuperior"),
    ('\u{f6f0}', "osuperior"),
    ('\u{f6f1}', "rsuperior"),
    ('\u{f6f2}', "ssuperior"),
    ('\u{f6f3}', "tsuperior"),
    ('\u{f6f4}', "Brevesmall"),
    ('\u{f6f5}', "Caronsmall"),
    ('\u{f6f6}', "Circumflexsmall"),
    ('\u{f6f7}', "Dotaccentsmall"),
    ('\u{f6f8}', "Hungarumlautsmall"),
    ('\u{f6f9}', "Lslashsmall"),
    ('\u{f6fa}', "OEsmall"),
    ('\u{f6fb}', "Ogoneksmall"),
    ('\u{f6fc}', "Ringsmall"),
    ('\u{f6fd}', "Scaronsmall"),
    ('\u{f6fe}', "Tildesmall"),
    ('\u{f6ff}', "Zcaronsmall"),
    ('\u{f721}', "exclamsmall"),
    ('\u{f724}', "dollaroldstyle"),
    ('\u{f726}', "ampersandsmall"),
    ('\u{f730}', "zerooldstyle"),
    ('\u{f731}', "oneoldstyle"),
    ('\u{f732}', "twooldstyle"),
    ('\u{f733}', "threeoldstyle"),
    ('\u{f734}', "fouroldstyle"),
    ('\u{f735}', "fiveoldstyle"),
    ('\u{f736}', "sixoldstyle"),
    ('\u{f737}', "sevenoldstyle"),
    ('\u{f738}', "eightoldstyle"),
    ('\u{f739}', "nineoldstyle"),
    ('\u{f73f}', "questionsmall"),
    ('\u{f760}', "Gravesmall"),
    ('\u{f761}', "Asmall"),
    ('\u{f762}', "Bsmall"),
    ('\u{f763}', "Csmall"),
    ('\u{f764}', "Dsmall"),
    ('\u{f765}', "Esmall"),
    ('\u{f766}', "Fsmall"),
    ('\u{f767}', "Gsmall"),
    ('\u{f768}', "Hsmall"),
    ('\u{f769}', "Ismall"),
    ('\u{f76a}', "Jsmall"),
    ('\u{f76b}', "Ksmall"),
    ('\u{f76c}', "Lsmall"),
    ('\u{f76d}', "Msmall"),
    ('\u{f76e}', "Nsmall"),
    ('\u{f76f}', "Osmall"),
    ('\u{f770}', "Psmall"),
    ('\u{f771}', "Qsmall"),
    ('\u{f772}', "Rsmall"),
    ('\u{f773}', "Ssmall"),
    ('\u{f774}', "Tsmall"),
    ('\u{f775}', "Usmall"),
    ('\u{f776}', "Vsmall"),
    ('\u{f777}', "Wsmall"),
    ('\u{f778}', "Xsmall"),
    ('\u{f779}', "Ysmall"),
    ('\u{f77a}', "Zsmall"),
    ('\u{f7a1}', "exclamdownsmall"),
    ('\u{f7a2}', "centoldstyle"),
    ('\u{f7a8}', "Dieresissmall"),
    ('\u{f7af}', "Macronsmall"),
    ('\u{f7b4}', "Acutesmall"),
    ('\u{f7b8}', "Cedillasmall"),
    ('\u{f7bf}', "questiondownsmall"),
    ('\u{f7e0}', "Agravesmall"),
    ('\u{f7e1}', "Aacutesmall"),
    ('\u{f7e2}', "Acircumflexsmall"),
    ('\u{f7e3}', "Atildesmall"),
    ('\u{f7e4}', "Adieresissmall"),
    ('\u{f7e5}', "Aringsmall"),
    ('\u{f7e6}', "AEsmall"),
    ('\u{f7e7}', "Ccedillasmall"),
    ('\u{f7e8}', "Egravesmall"),
    ('\u{f7e9}', "Eacutesmall"),
    ('\u{f7ea}', "Ecircumflexsmall"),
    ('\u{f7eb}', "Edieresissmall"),
    ('\u{f7ec}', "Igravesmall"),
    ('\u{f7ed}', "Iacutesmall"),
    ('\u{f7ee}', "Icircumflexsmall"),
    ('\u{f7ef}', "Idieresissmall"),
    ('\u{f7f0}', "Ethsmall"),
    ('\u{f7f1}', "Ntildesmall"),
    ('\u{f7f2}', "Ogravesmall"),
    ('\u{f7f3}', "Oacutesmall"),
    ('\u{f7f4}', "Ocircumflexsmall"),
    ('\u{f7f5}', "Otildesmall"),
    ('\u{f7f6}', "Odieresissmall"),
    ('\u{f7f8}', "Oslashsmall"),
    ('\u{f7f9}', "Ugravesmall"),
    ('\u{f7fa}', "Uacutesmall"),
    ('\u{f7fb}', "Ucircumflexsmall"),
    ('\u{f7fc}', "Udieresissmall"),
    ('\u{f7fd}', "Yacutesmall"),
    ('\u{f7fe}', "Thornsmall"),
    ('\u{f7ff}', "Ydieresissmall"),
    ('\u{f884}', "maihanakatleftthai"),
    ('\u{f885}', "saraileftthai"),
    ('\u{f886}', "saraiileftthai"),
    ('\u{f887}', "saraueleftthai"),
    ('\u{f888}', "saraueeleftthai"),
    ('\u{f889}', "maitaikhuleftthai"),
    ('\u{f88a}', "maiekupperleftthai"),
    ('\u{f88b}', "maieklowrightthai"),
    ('\u{f88c}', "maieklowleftthai"),
    ('\u{f88d}', "maithoupperleftthai"),
    ('\u{f88e}', "maitholowrightthai"),
    ('\u{f88f}', "maitholowleftthai"),
    ('\u{f890}', "maitriupperleftthai"),
    ('\u{f891}', "maitrilowrightthai"),
    ('\u{f892}', "maitrilowleftthai"),
    ('\u{f893}', "maichattawaupperleftthai"),
    ('\u{f894}', "maichattawalowrightthai"),
    ('\u{f895}', "maichattawalowleftthai"),
    ('\u{f896}', "thanthakhatupperleftthai"),
    ('\u{f897}', "thanthakhatlowrightthai"),
    ('\u{f898}', "thanthakhatlowleftthai"),
    ('\u{f899}', "nikhahitleftthai"),
    ('\u{f8d7}', "a89"),
    ('\u{f8d8}', "a90"),
    ('\u{f8d9}', "a93"),
    ('\u{f8da}', "a94"),
    ('\u{f8db}', "a91"),
    ('\u{f8dc}', "a92"),
    ('\u{f8dd}', "a205"),
    ('\u{f8de}', "a85"),
    ('\u{f8df}', "a206"),
    ('\u{f8e0}', "a86"),
    ('\u{f8e1}', "a87"),
    ('\u{f8e2}', "a88"),
    ('\u{f8e3}', "a95"),
    ('\u{f8e4}', "a96"),
    ('\u{f8e5}', "radicalex"),
    ('\u{f8e6}', "arrowvertex2"),
    ('\u{f8e7}', "arrowhorizex"),
    ('\u{f8e8}', "registersans"),
    ('\u{f8e9}', "copyrightsans"),
    ('\u{f8ea}', "trademarksans"),
    ('\u{f8eb}', "parenlefttp"),
    ('\u{f8ec}', "parenleftex2"),
    ('\u{f8ed}', "parenleftbt"),
    ('\u{f8ee}', "bracketlefttp"),
    ('\u{f8ef}', "bracketleftex"),
    ('\u{f8f0}', "bracketleftbt"),
    ('\u{f8f1}', "bracelefttp"),
    ('\u{f8f2}', "braceleftmid2"),
    ('\u{f8f3}', "braceleftbt"),
    ('\u{f8f4}', "braceex2"),
    ('\u{f8f5}', "integralex"),
    ('\u{f8f6}', "parenrighttp"),
    ('\u{f8f7}', "parenrightex2"),
    ('\u{f8f8}', "parenrightbt"),
    ('\u{f8f9}', "bracketrighttp"),
    ('\u{f8fa}', "bracketrightex"),
    ('\u{f8fb}', "bracketrightbt"),
    ('\u{f8fc}', "bracerighttp"),
    ('\u{f8fd}', "bracerightmid2"),
    ('\u{f8fe}', "bracerightbt"),
    ('\u{f8ff}', "apple"),
    ('\u{fb00}', "ff"),
    ('\u{fb01}', "fi"),
    ('\u{fb02}', "fl"),
    ('\u{fb03}', "ffi"),
    ('\u{fb04}', "ffl"),
    ('\u{fb1f}', "afii57705"),
    ('\u{fb20}', "ayinaltonehebrew"),
    ('\u{fb2a}', "afii57694"),
    ('\u{fb2b}', "afii57695"),
    ('\u{fb2c}', "shindageshshindot"),
    ('\u{fb2d}', "shindageshsindot"),
    ('\u{fb2e}', "alefpatahhebrew"),
    ('\u{fb2f}', "alefqamatshebrew"),
    ('\u{fb30}', "alefdageshhebrew"),
    ('\u{fb31}', "betdagesh"),
    ('\u{fb32}', "gimeldagesh"),
    ('\u{fb33}', "daletdagesh"),
    ('\u{fb34}', "hedagesh"),
    ('\u{fb35}', "afii57723"),
    ('\u{fb36}', "zayindagesh"),
    ('\u{fb38}', "tetdagesh"),
    ('\u{fb39}', "yoddagesh"),
    ('\u{fb3a}', "finalkafdagesh"),
    ('\u{fb3b}', "kafdagesh"),
    ('\u{fb3c}', "lameddagesh"),
    ('\u{fb3e}', "memdagesh"),
    ('\u{fb40}', "nundagesh"),
    ('\u{fb41}', "samekhdagesh"),
    ('\u{fb43}', "pefinaldageshhebrew"),
    ('\u{fb44}', "pedagesh"),
    ('\u{fb46}', "tsadidagesh"),
    ('\u{fb47}', "qofdagesh"),
    ('\u{fb48}', "reshdageshhebrew"),
    ('\u{fb49}', "shindagesh"),
    ('\u{fb4a}', "tavdages"),
    ('\u{fb4b}', "vavholam"),
    ('\u{fb4c}', "betrafehebrew"),
    ('\u{fb4d}', "kafrafehebrew"),
    ('\u{fb4e}', "perafehebrew"),
    ('\u{fb4f}', "aleflamedhebrew"),
    ('\u{fb57}', "pehfinalarabic"),
    ('\u{fb58}', "pehinitialarabic"),
    ('\u{fb59}', "pehmedialarabic"),
    ('\u{fb67}', "ttehfinalarabic"),
    ('\u{fb68}', "ttehinitialarabic"),
    ('\u{fb69}', "ttehmedialarabic"),
    ('\u{fb6b}', "vehfinalarabic"),
    ('\u{fb6c}', "vehinitialarabic"),
    ('\u{fb6d}', "vehmedialarabic"),
    ('\u{fb7b}', "tchehfinalarabic"),
    ('\u{fb7c}', "tchehinitialarabic"),
    ('\u{fb7d}', "tchehmedialarabic"),
    ('\u{fb89}', "ddalfinalarabic"),
    ('\u{fb8b}', "jehfinalarabic"),
    ('\u{fb8d}', "rrehfinalarabic"),
    ('\u{fb93}', "gaffinalarabic"),
    ('\u{fb94}', "gafinitialarabic"),
    ('\u{fb95}', "gafmedialarabic"),
    ('\u{fb9f}', "noonghunnafinalarabic"),
    ('\u{fba4}', "hehhamzaaboveisolatedarabic"),
    ('\u{fba5}', "hehhamzaabovefinalarabic"),
    ('\u{fba7}', "hehfinalaltonearabic"),
    ('\u{fba8}', "hehinitialaltonearabic"),
    ('\u{fba9}', "hehmedialaltonearabic"),
    ('\u{fbaf}', "yehbarreefinalarabic"),
    ('\u{fc08}', "behmeemisolatedarabic"),
    ('\u{fc0b}', "tehjeemisolatedarabic"),
    ('\u{fc0c}', "tehhahisolatedarabic"),
    ('\u{fc0e}', "tehmeemisolatedarabic"),
    ('\u{fc48}', "meemmeemisolatedarabic"),
    ('\u{fc4b}', "noonjeemisolatedarabic"),
    ('\u{fc4e}', "noonmeemisolatedarabic"),
    ('\u{fc58}', "yehmeemisolatedarabic"),
    ('\u{fc5e}', "shaddadammatanarabic"),
    ('\u{fc5f}', "shaddakasratanarabic"),
    ('\u{fc60}', "shaddafathaarabic"),
    ('\u{fc61}', "shaddadammaarabic"),
    ('\u{fc62}', "shaddakasraarabic"),
    ('\u{fc6d}', "behnoonfinalarabic"),
    ('\u{fc73}', "tehnoonfinalarabic"),
    ('\u{fc8d}', "noonnoonfinalarabic"),
    ('\u{fc94}', "yehnoonfinalarabic"),
    ('\u{fc9f}', "behmeeminitialarabic"),
    ('\u{fca1}', "tehjeeminitialarabic"),
    ('\u{fca2}', "tehhahinitialarabic"),
    ('\u{fca4}', "tehmeeminitialarabic"),
    ('\u{fcc9}', "lamjeeminitialarabic"),
    ('\u{fcca}', "lamhahinitialarabic"),
    ('\u{fccb}', "lamkhahinitialarabic"),
    ('\u{fccc}', "lammeeminitialarabic"),
    ('\u{fcd1}', "meemmeeminitialarabic"),
    ('\u{fcd2}', "noonjeeminitialarabic"),
    ('\u{fcd5}', "noonmeeminitialarabic"),
    ('\u{fcdd}', "yehmeeminitialarabic"),
    ('\u{fd3e}', "parenleftaltonearabic"),
    ('\u{fd3f}', "parenrightaltonearabic"),
    ('\u{fd88}', "lammeemhahinitialarabic"),
    ('\u{fdf2}', "lamlamhehisolatedarabic"),
    ('\u{fdfa}', "sallallahoualayhewasallamarabic"),
    ('\u{fe30}', "twodotleadervertical"),
    ('\u{fe31}', "emdashvertical"),
    ('\u{fe32}', "endashvertical"),
    ('\u{fe33}', "underscorevertical"),
    ('\u{fe34}', "wavyunderscorevertical"),
    ('\u{fe35}', "parenleftvertical"),
    ('\u{fe36}', "parenrightvertical"),
    ('\u{fe37}', "braceleftvertical"),
    ('\u{fe38}', "bracerightvertical"),
    ('\u{fe39}', "tortoiseshellbracketleftvertical"),
    ('\u{fe3a}', "tortoiseshellbracketrightvertical"),
    ('\u{fe3b}', "blacklenticularbracketleftvertical"),
    ('\u{fe3c}', "blacklenticularbracketrightvertical"),
    ('\u{fe3d}', "dblanglebracketleftvertical"),
    ('\u{fe3e}', "dblanglebracketrightvertical"),
    ('\u{fe3f}', "anglebracketleftvertical"),
    ('\u{fe40}', "anglebracketrightvertical"),
    ('\u{fe41}', "cornerbracketleftvertical"),
    ('\u{fe42}', "cornerbracketrightvertical"),
    ('\u{fe43}', "whitecornerbracketleftvertical"),
    ('\u{fe44}', "whitecornerbracketrightvertical"),
    ('\u{fe49}', "overlinedashed"),
    ('\u{fe4a}', "overlinecenterline"),
    ('\u{fe4b}', "overlinewavy"),
    ('\u{fe4c}', "overlinedblwavy"),
    ('\u{fe4d}', "lowlinedashed"),
    ('\u{fe4e}', "lowlinecenterline"),
    ('\u{fe4f}', "underscorewavy"),
    ('\u{fe50}', "commasmall"),
    ('\u{fe52}', "periodsmall"),
    ('\u{fe54}', "semicolonsmall"),
    ('\u{fe55}', "colonsmall"),
    ('\u{fe59}', "parenleftsmall"),
    ('\u{fe5a}', "parenrightsmall"),
    ('\u{fe5b}', "braceleftsmall"),
    ('\u{fe5c}', "bracerightsmall"),
    ('\u{fe5d}', "tortoiseshellbracketleftsmall"),
    ('\u{fe5e}', "tortoiseshellbracketrightsmall"),
    ('\u{fe5f}', "numbersignsmall"),
    ('\u{fe61}', "asterisksmall"),
    ('\u{fe62}', "plussmall"),
    ('\u{fe63}', "hyphensmall"),
    ('\u{fe64}', "lesssmall"),
    ('\u{fe65}', "greatersmall"),
    ('\u{fe66}', "equalsmall"),
    ('\u{fe69}', "dollarsmall"),
    ('\u{fe6a}', "percentsmall"),
    ('\u{fe6b}', "atsmall"),
    ('\u{fe82}', "alefmaddaabovefinalarabic"),
    ('\u{fe84}', "alefhamzaabovefinalarabic"),
    ('\u{fe86}', "wawhamzaabovefinalarabic"),
    ('\u{fe88}', "alefhamzabelowfinalarabic"),
    ('\u{fe8a}', "yehhamzaabovefinalarabic"),
    ('\u{fe8b}', "yehhamzaaboveinitialarabic"),
    ('\u{fe8c}', "yehhamzaabovemedialarabic"),
    ('\u{fe8e}', "aleffinalarabic"),
    ('\u{fe90}', "behfinalarabic"),
    ('\u{fe91}', "behinitialarabic"),
    ('\u{fe92}', "behmedialarabic"),
    ('\u{fe94}', "tehmarbutafinalarabic"),
    ('\u{fe96}', "tehfinalarabic"),
    ('\u{fe97}', "tehinitialarabic"),
    ('\u{fe98}', "tehmedialarabic"),
    ('\u{fe9a}', "thehfinalarabic"),
    ('\u{fe9b}', "thehinitialarabic"),
    ('\u{fe9c}', "thehmedialarabic"),
    ('\u{fe9e}', "jeemfinalarabic"),
    ('\u{fe9f}', "jeeminitialarabic"),
    ('\u{fea0}', "jeemmedialarabic"),
    ('\u{fea2}', "hahfinalarabic"),
    ('\u{fea3}', "hahinitialarabic"),
    ('\u{fea4}', "hahmedialarabic"),
    ('\u{fea6}', "khahfinalarabic"),
    ('\u{fea7}', "khahinitialarabic"),
    ('\u{fea8}', "khahmedialarabic"),
    ('\u{feaa}', "dalfinalarabic"),
    ('\u{feac}', "thalfinalarabic"),
    ('\u{feae}', "rehfinalarabic"),
    ('\u{feb0}', "zainfinalarabic"),
    ('\u{feb2}', "seenfinalarabic"),
    ('\u{feb3}', "seeninitialarabic"),
    ('\u{feb4}', "seenmedialarabic"),
    ('\u{feb6}', "sheenfinalarabic"),
    ('\u{feb7}', "sheeninitialarabic"),
    ('\u{feb8}', "sheenmedialarabic"),
    ('\u{feba}', "sadfinalarabic"),
    ('\u{febb}', "sadinitialarabic"),
    ('\u{febc}', "sadmedialarabic"),
    ('\u{febe}', "dadfinalarabic"),
    ('\u{febf}', "dadinitialarabic"),
    ('\u{fec0}', "dadmedialarabic"),
    ('\u{fec2}', "tahfinalarabic"),
    ('\u{fec3}', "tahinitialarabic"),
    ('\u{fec4}', "tahmedialarabic"),
    ('\u{fec6}', "zahfinalarabic"),
    ('\u{fec7}', "zahinitialarabic"),
    ('\u{fec8}', "zahmedialarabic"),
    ('\u{feca}', "ainfinalarabic"),
    ('\u{fecb}', "aininitialarabic"),
    ('\u{fecc}', "ainmedialarabic"),
    ('\u{fece}', "ghainfinalarabic"),
    ('\u{fecf}', "ghaininitialarabic"),
    ('\u{fed0}', "ghainmedialarabic"),
    ('\u{fed2}', "fehfinalarabic"),
    ('\u{fed3}', "fehinitialarabic"),
    ('\u{fed4}', "fehmedialarabic"),
    ('\u{fed6}', "qaffinalarabic"),
    ('\u{fed7}', "qafinitialarabic"),
    ('\u{fed8}', "qafmedialarabic"),
    ('\u{feda}', "kaffinalarabic"),
    ('\u{fedb}', "kafinitialarabic"),
    ('\u{fedc}', "kafmedialarabic"),
    ('\u{fede}', "lamfinalarabic"),
    ('\u{fedf}', "laminitialarabic"),
    ('\u{fee0}', "lammedialarabic"),
    ('\u{fee2}', "meemfinalarabic"),
    ('\u{fee3}', "meeminitialarabic"),
    ('\u{fee4}', "meemmedialarabic"),
    ('\u{fee6}', "noonfinalarabic"),
    ('\u{fee7}', "nooninitialarabic"),
    ('\u{fee8}', "noonmedialarabic"),
    ('\u{feea}', "hehfinalarabic"),
    ('\u{feeb}', "hehinitialarabic"),
    ('\u{feec}', "hehmedialarabic"),
    ('\u{feee}', "wawfinalarabic"),
    ('\u{fef0}', "alefmaksurafinalarabic"),
    ('\u{fef2}', "yehfinalarabic"),
    ('\u{fef3}', "yehinitialarabic"),
    ('\u{fef4}', "yehmedialarabic"),
    ('\u{fef5}', "lamalefmaddaaboveisolatedarabic"),
    ('\u{fef6}', "lamalefmaddaabovefinalarabic"),
    ('\u{fef7}', "lamalefhamzaaboveisolatedarabic"),
    ('\u{fef8}', "lamalefhamzaabovefinalarabic"),
    ('\u{fef9}', "lamalefhamzabelowisolatedarabic"),
    ('\u{fefa}', "lamalefhamzabelowfinalarabic"),
    ('\u{fefb}', "lamalefisolatedarabic"),
    ('\u{fefc}', "lamaleffinalarabic"),
    ('\u{feff}', "zerowidthjoiner"),
    ('\u{ff01}', "exclammonospace"),
    ('\u{ff02}', "quotedblmonospace"),
    ('\u{ff03}', "numbersignmonospace"),
    ('\u{ff04}', "dollarmonospace"),
    ('\u{ff05}', "percentmonospace"),
    ('\u{ff06}', "ampersandmonospace"),
    ('\u{ff07}', "quotesinglemonospace"),
    ('\u{ff08}', "parenleftmonospace"),
    ('\u{ff09}', "parenrightmonospace"),
    ('\u{ff0a}', "asteriskmonospace"),
    ('\u{ff0b}', "plusmonospace"),
    ('\u{ff0c}', "commamonospace"),
    ('\u{ff0d}', "hyphenmonospace"),
    ('\u{ff0e}', "periodmonospace"),
    ('\u{ff0f}', "slashmonospace"),
    ('\u{ff10}', "zeromonospace"),
    ('\u{ff11}', "onemonospace"),
    ('\u{ff12}', "twomonospace"),
    ('\u{ff13}', "threemonospace"),
    ('\u{ff14}', "fourmonospace"),
    ('\u{ff15}', "fivemonospace"),
    ('\u{ff16}', "sixmonospace"),
    ('\u{ff17}', "sevenmonospace"),
    ('\u{ff18}', "eightmonospace"),
    ('\u{ff19}', "ninemonospace"),
    ('\u{ff1a}', "colonmonospace"),
    ('\u{ff1b}', "semicolonmonospace"),
    ('\u{ff1c}', "lessmonospace"),
    ('\u{ff1d}', "equalmonospace"),
    ('\u{ff1e}', "greatermonospace"),
    ('\u{ff1f}', "questionmonospace"),
    ('\u{ff20}', "atmonospace"),
    ('\u{ff21}', "Amonospace"),
    ('\u{ff22}', "Bmonospace"),
    ('\u{ff23}', "Cmonospace"),
    ('\u{ff24}', "Dmonospace"),
    ('\u{ff25}', "Emonospace"),
    ('\u{ff26}', "Fmonospace"),
    ('\u{ff27}', "Gmonospace"),
    ('\u{ff28}', "Hmonospace"),
    ('\u{ff29}', "Imonospace"),
    ('\u{ff2a}', "Jmonospace"),
    ('\u{ff2b}', "Kmonospace"),
    ('\u{ff2c}', "Lmonospace"),
    ('\u{ff2d}', "Mmonospace"),
    ('\u{ff2e}', "Nmonospace"),
    ('\u{ff2f}', "Omonospace"),
    ('\u{ff30}', "Pmonospace"),
    ('\u{ff31}', "Qmonospace"),
    ('\u{ff32}', "Rmonospace"),
    ('\u{ff33}', "Smonospace"),
    ('\u{ff34}', "Tmonospace"),
    ('\u{ff35}', "Umonospace"),
    ('\u{ff36}', "Vmonospace"),
    ('\u{ff37}', "Wmonospace"),
    ('\u{ff38}', "Xmonospace"),
    ('\u{ff39}', "Ymonospace"),
    ('\u{ff3a}', "Zmonospace"),
    ('\u{ff3b}', "bracketleftmonospace"),
    ('\u{ff3c}', "backslashmonospace"),
    ('\u{ff3d}', "bracketrightmonospace"),
    ('\u{ff3e}', "asciicircummonospace"),
    ('\u{ff3f}', "underscoremonospace"),
    ('\u{ff40}', "gravemonospace"),
    ('\u{ff41}', "amonospace"),
    ('\u{ff42}', "bmonospace"),
    ('\u{ff43}', "cmonospace"),
    ('\u{ff44}', "dmonospace"),
    ('\u{ff45}', "emonospace"),
    ('\u{ff46}', "fmonospace"),
    ('\u{ff47}', "gmonospace"),
    ('\u{ff48}', "hmonospace"),
    ('\u{ff49}', "imonospace"),
    ('\u{ff4a}', "jmonospace"),
    ('\u{ff4b}', "kmonospace"),
    ('\u{ff4c}', "lmonospace"),
    ('\u{ff4d}', "mmonospace"),
    ('\u{ff4e}', "nmonospace"),
    ('\u{ff4f}', "omonospace"),
    ('\u{ff50}', "pmonospace"),
    ('\u{ff51}', "qmonospace"),
    ('\u{ff52}', "rmonospace"),
    ('\u{ff53}', "smonospace"),
    ('\u{ff54}', "tmonospace"),
    ('\u{ff55}', "umonospace"),
    ('\u{ff56}', "vmonospace"),
    ('\u{ff57}', "wmonospace"),
    ('\u{ff58}', "xmonospace"),
    ('\u{ff59}', "ymonospace"),
    ('\u{ff5a}', "zmonospace"),
    ('\u{ff5b}', "braceleftmonospace"),
    ('\u{ff5c}', "barmonospace"),
    ('\u{ff5d}', "bracerightmonospace"),
    ('\u{ff5e}', "asciitildemonospace"),
    ('\u{ff61}', "periodhalfwidth"),
    ('\u{ff62}', "cornerbracketlefthalfwidth"),
    ('\u{ff63}', "cornerbracketrighthalfwidth"),
    ('\u{ff64}', "ideographiccommaleft"),
    ('\u{ff65}', "middledotkatakanahalfwidth"),
    ('\u{ff66}', "wokatakanahalfwidth"),
    ('\u{ff67}', "asmallkatakanahalfwidth"),
    ('\u{ff68}', "ismallkatakanahalfwidth"),
    ('\u{ff69}', "usmallkatakanahalfwidth"),
    ('\u{ff6a}', "esmallkatakanahalfwidth"),
    ('\u{ff6b}', "osmallkatakanahalfwidth"),
    ('\u{ff6c}', "yasmallkatakanahalfwidth"),
    ('\u{ff6d}', "yusmallkatakanahalfwidth"),
    ('\u{ff6e}', "yosmallkatakanahalfwidth"),
    ('\u{ff6f}', "tusmallkatakanahalfwidth"),
    ('\u{ff70}', "katahiraprolongmarkhalfwidth"),
    ('\u{ff71}', "akatakanahalfwidth"),
    ('\u{ff72}', "ikatakanahalfwidth"),
    ('\u{ff73}', "ukatakanahalfwidth"),
    ('\u{ff74}', "ekatakanahalfwidth"),
    ('\u{ff75}', "okatakanahalfwidth"),
    ('\u{ff76}', "kakatakanahalfwidth"),
    ('\u{ff77}', "kikatakanahalfwidth"),
    ('\u{ff78}', "kukatakanahalfwidth"),
    ('\u{ff79}', "kekatakanahalfwidth"),
    ('\u{ff7a}', "kokatakanahalfwidth"),
    ('\u{ff7b}', "sakatakanahalfwidth"),
    ('\u{ff7c}', "sikatakanahalfwidth"),
    ('\u{ff7d}', "sukatakanahalfwidth"),
    ('\u{ff7e}', "sekatakanahalfwidth"),
    ('\u{ff7f}', "sokatakanahalfwidth"),
    ('\u{ff80}', "takatakanahalfwidth"),
    ('\u{ff81}', "tikatakanahalfwidth"),
    ('\u{ff82}', "tukatakanahalfwidth"),
    ('\u{ff83}', "tekatakanahalfwidth"),
    ('\u{ff84}', "tokatakanahalfwidth"),
    ('\u{ff85}', "nakatakanahalfwidth"),
    ('\u{ff86}', "nikatakanahalfwidth"),
    ('\u{ff87}', "nukatakanahalfwidth"),
    ('\u{ff88}', "nekatakanahalfwidth"),
    ('\u{ff89}', "nokatakanahalfwidth"),
    ('\u{ff8a}', "hakatakanahalfwidth"),
    ('\u{ff8b}', "hikatakanahalfwidth"),
    ('\u{ff8c}', "hukatakanahalfwidth"),
    ('\u{ff8d}', "hekatakanahalfwidth"),
    ('\u{ff8e}', "hokatakanahalfwidth"),
    ('\u{ff8f}', "makatakanahalfwidth"),
    ('\u{ff90}', "mikatakanahalfwidth"),
    ('\u{ff91}', "mukatakanahalfwidth"),
    ('\u{ff92}', "mekatakanahalfwidth"),
    ('\u{ff93}', "mokatakanahalfwidth"),
    ('\u{ff94}', "yakatakanahalfwidth"),
    ('\u{ff95}', "yukatakanahalfwidth"),
    ('\u{ff96}', "yokatakanahalfwidth"),
    ('\u{ff97}', "rakatakanahalfwidth"),
    ('\u{ff98}', "rikatakanahalfwidth"),
    ('\u{ff99}', "rukatakanahalfwidth"),
    ('\u{ff9a}', "rekatakanahalfwidth"),
    ('\u{ff9b}', "rokatakanahalfwidth"),
    ('\u{ff9c}', "wakatakanahalfwidth"),
    ('\u{ff9d}', "nkatakanahalfwidth"),
    ('\u{ff9e}', "voicedmarkkanahalfwidth"),
    ('\u{ff9f}', "semivoicedmarkkanahalfwidth"),
    ('\u{ffe0}', "centmonospace"),
    ('\u{ffe1}', "sterlingmonospace"),
    ('\u{ffe3}', "macronmonospace"),
    ('\u{ffe5}', "yenmonospace"),
    ('\u{ffe6}', "wonmonospace"),
    ('\u{fffd}', ".notdef"),
];
