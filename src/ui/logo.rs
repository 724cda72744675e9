use crate::data::PlatformId;
use crate::utils::text_width;

const WINDOWS: &[&str] = &[
    r"                                ..,",
    r"                    ....,,:;+ccllll",
    r"      ...,,+:;  cllllllllllllllllll",
    r",cclllllllllll  lllllllllllllllllll",
    r"llllllllllllll  lllllllllllllllllll",
    r"llllllllllllll  lllllllllllllllllll",
    r"llllllllllllll  lllllllllllllllllll",
    r"llllllllllllll  lllllllllllllllllll",
    r"llllllllllllll  lllllllllllllllllll",
    r"",
    r"llllllllllllll  lllllllllllllllllll",
    r"llllllllllllll  lllllllllllllllllll",
    r"llllllllllllll  lllllllllllllllllll",
    r"llllllllllllll  lllllllllllllllllll",
    r"llllllllllllll  lllllllllllllllllll",
    r"`'ccllllllllll  lllllllllllllllllll",
    r"      ``' \*::  :ccllllllllllllllll",
    r"                   ````````''*::cll",
    r"                               ````",
];

const TUX: &[&str] = &[
    r"        #####",
    r"       #######",
    r"       ##O#O##",
    r"       #VVVVV#",
    r"     ##  VVV  ##",
    r"    #          ##",
    r"   #            ##",
    r"   #            ###",
    r"  QQ#           ##Q",
    r"QQQQQQ#       #QQQQQQ",
    r"QQQQQQQ#     #QQQQQQQ",
    r"  QQQQQ#######QQQQQ",
];

const APPLE: &[&str] = &[
    r"                    'c.",
    r"                 ,xNMM.",
    r"               .OMMMMo",
    r"               OMMM0,",
    r"     .;loddo:' loolloddol;.",
    r"   cKMMMMMMMMMMNWMMMMMMMMMM0:",
    r" .KMMMMMMMMMMMMMMMMMMMMMMMWd.",
    r" XMMMMMMMMMMMMMMMMMMMMMMMX.",
    r";MMMMMMMMMMMMMMMMMMMMMMMM:",
    r":MMMMMMMMMMMMMMMMMMMMMMMM:",
    r".MMMMMMMMMMMMMMMMMMMMMMMMX.",
    r" kMMMMMMMMMMMMMMMMMMMMMMMMWd.",
    r" .XMMMMMMMMMMMMMMMMMMMMMMMMMMk",
    r"  .XMMMMMMMMMMMMMMMMMMMMMMMMK.",
    r"    kMMMMMMMMMMMMMMMMMMMMMMd",
    r"     ;KMMMMMMMWXXWMMMMMMMk.",
    r"       .cooc,.    .,coo:.",
];

pub fn logo_for(platform: PlatformId) -> &'static [&'static str] {
    match platform {
        PlatformId::Windows => WINDOWS,
        PlatformId::MacOs => APPLE,
        PlatformId::Linux | PlatformId::Other => TUX,
    }
}

pub fn logo_width(logo: &[&str]) -> usize {
    logo.iter().map(|line| text_width(line)).max().unwrap_or(0)
}
