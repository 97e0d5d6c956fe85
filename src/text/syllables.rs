//! Hanyu pinyin syllable to katakana table.
//!
//! Transcriptions follow the Heibonsha classroom guideline for Chinese
//! syllables. Keys are tone-stripped syllables with `ü` spelled out.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Syllables whose reading is pinned ahead of the table lookup.
///
/// `yu*` syllables share a prefix with `yu`, so these are resolved first.
pub(crate) const SYLLABLE_OVERRIDES: &[(&str, &str)] =
    &[("yuan", "ユエン"), ("yue", "ユエ"), ("yun", "ユン")];

pub(crate) static SYLLABLES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SYLLABLE_ENTRIES.iter().copied().collect());

/// Number of syllables the table covers.
pub fn syllable_count() -> usize {
    SYLLABLES.len()
}

const SYLLABLE_ENTRIES: &[(&str, &str)] = &[
    // A
    ("a", "アー"), ("ai", "アイ"), ("an", "アン"), ("ang", "アアン"), ("ao", "アオ"),
    // O, E, ER
    ("o", "オー"), ("ou", "オウ"), ("ong", "オオン"),
    ("e", "オー"), ("ei", "エイ"), ("en", "エン"), ("eng", "エエン"), ("er", "アル"),
    // B
    ("ba", "バー"), ("bo", "ボォ"), ("bai", "バイ"), ("bei", "ベイ"), ("bao", "バオ"), ("ban", "バン"),
    ("ben", "ベン"), ("bang", "バアン"), ("beng", "ベン"), ("bi", "ビィ"), ("bie", "ビエ"),
    ("biao", "ビアオ"), ("bian", "ビエン"), ("bin", "ビン"), ("bing", "ビイン"), ("bu", "ブー"),
    // P
    ("pa", "パー"), ("po", "ポォ"), ("pai", "パイ"), ("pei", "ペイ"), ("pao", "パオ"), ("pou", "ポウ"),
    ("pan", "パン"), ("pen", "ペン"), ("pang", "パアン"), ("peng", "ペン"), ("pi", "ピィ"), ("pie", "ピエ"),
    ("piao", "ピアオ"), ("pian", "ピエン"), ("pin", "ピン"), ("ping", "ピイン"), ("pu", "プー"),
    // M
    ("ma", "マー"), ("mo", "モォ"), ("me", "メ"), ("mai", "マイ"), ("mei", "メイ"), ("mao", "マオ"),
    ("mou", "モウ"), ("man", "マン"), ("men", "メン"), ("mang", "マアン"), ("meng", "メン"), ("mi", "ミィ"),
    ("mie", "ミエ"), ("miao", "ミアオ"), ("miu", "ミウ"), ("mian", "ミエン"), ("min", "ミン"),
    ("ming", "ミイン"), ("mu", "ムー"),
    // F
    ("fa", "ファー"), ("fo", "フォ"), ("fei", "フェイ"), ("fen", "フェン"), ("fang", "フアアン"),
    ("feng", "フォン"), ("fan", "ファン"), ("fou", "フォウ"), ("fu", "フー"),
    // D
    ("da", "ダー"), ("de", "ドー"), ("dai", "ダイ"), ("dei", "デイ"), ("dao", "ダオ"), ("dou", "ドウ"),
    ("dan", "ダン"), ("den", "デン"), ("dang", "ダアン"), ("deng", "デン"), ("dong", "ドオン"),
    ("di", "ディ"), ("die", "ディエ"), ("diao", "ディアオ"), ("diu", "ディウ"), ("dian", "ディエン"),
    ("ding", "ディイン"), ("du", "ドゥー"), ("duo", "ドゥオ"), ("dui", "ドゥイ"), ("dun", "ドゥン"),
    ("duan", "ドゥアン"),
    // T
    ("ta", "ター"), ("te", "トー"), ("tai", "タイ"), ("tei", "テイ"), ("tao", "タオ"), ("tou", "トウ"),
    ("tan", "タン"), ("tang", "タアン"), ("teng", "テン"), ("tong", "トオン"), ("ti", "ティ"),
    ("tie", "ティエ"), ("tiao", "ティアオ"), ("tian", "ティエン"), ("ting", "ティイン"), ("tu", "トゥー"),
    ("tuo", "トゥオ"), ("tui", "トゥイ"), ("tun", "トゥン"), ("tuan", "トゥアン"),
    // N
    ("na", "ナー"), ("ne", "ノー"), ("nai", "ナイ"), ("nei", "ネイ"), ("nao", "ナオ"), ("nou", "ノウ"),
    ("nan", "ナン"), ("nen", "ネン"), ("nang", "ナアン"), ("neng", "ネン"), ("nong", "ノオン"),
    ("ni", "ニィ"), ("nie", "ニエ"), ("niao", "ニアオ"), ("niu", "ニウ"), ("nian", "ニエン"), ("nin", "ニン"),
    ("niang", "ニアアン"), ("ning", "ニイン"), ("nu", "ヌー"), ("nuo", "ヌオ"), ("nuan", "ヌアン"),
    ("nü", "ニュ"), ("nüe", "ニュエ"),
    // L
    ("la", "ラー"), ("le", "ロー"), ("lai", "ライ"), ("lei", "レイ"), ("lao", "ラオ"), ("lou", "ロウ"),
    ("lan", "ラン"), ("lang", "ラアン"), ("leng", "レン"), ("long", "ロオン"), ("li", "リィ"),
    ("lia", "リア"), ("lie", "リエ"), ("liao", "リアオ"), ("liu", "リウ"), ("lian", "リエン"),
    ("lin", "リン"), ("liang", "リアアン"), ("ling", "リイン"), ("lu", "ルー"), ("luo", "ルオ"),
    ("lü", "リュ"), ("lüe", "リュエ"), ("luan", "ルアン"),
    // G
    ("ga", "ガー"), ("ge", "ゴー"), ("gai", "ガイ"), ("gei", "ゲイ"), ("gao", "ガオ"), ("gou", "ゴウ"),
    ("gan", "ガン"), ("gen", "ゲン"), ("gang", "ガアン"), ("geng", "ゲン"), ("gong", "ゴオン"),
    ("gu", "グー"), ("gua", "グア"), ("guo", "グオ"), ("guai", "グアイ"), ("gui", "グイ"), ("gun", "グン"),
    ("guan", "グアン"), ("guang", "グアアン"),
    // K
    ("ka", "カー"), ("ke", "コー"), ("kai", "カイ"), ("kei", "ケイ"), ("kao", "カオ"), ("kou", "コウ"),
    ("kan", "カン"), ("ken", "ケン"), ("kang", "カアン"), ("keng", "ケン"), ("kong", "コオン"),
    ("ku", "クー"), ("kua", "クア"), ("kuo", "クオ"), ("kuai", "クアイ"), ("kui", "クイ"), ("kun", "クン"),
    ("kuan", "クアン"), ("kuang", "クアアン"),
    // H
    ("ha", "ハー"), ("he", "ホー"), ("hai", "ハイ"), ("hei", "ヘイ"), ("hao", "ハオ"), ("hou", "ホウ"),
    ("han", "ハン"), ("hen", "ヘン"), ("hang", "ハアン"), ("heng", "ヘン"), ("hong", "ホオン"),
    ("hu", "フー"), ("hua", "フア"), ("huo", "フオ"), ("huai", "フアイ"), ("hui", "フイ"), ("hun", "フン"),
    ("huan", "フアン"), ("huang", "フアアン"),
    // J
    ("ji", "ジィ"), ("jia", "ジャ"), ("jie", "ジェ"), ("jiao", "ジャオ"), ("jiu", "ジウ"), ("jian", "ジエン"),
    ("jin", "ジン"), ("jiang", "ジアアン"), ("jing", "ジイン"), ("jiong", "ジョン"), ("ju", "ジュ"),
    ("jue", "ジュエ"), ("juan", "ジュエン"), ("jun", "ジュン"),
    // Q
    ("qi", "チィ"), ("qia", "チャ"), ("qie", "チェ"), ("qiao", "チャオ"), ("qiu", "チウ"), ("qian", "チエン"),
    ("qin", "チン"), ("qiang", "チアアン"), ("qing", "チイン"), ("qiong", "チョン"), ("qu", "チュ"),
    ("que", "チュエ"), ("quan", "チュエン"), ("qun", "チュン"),
    // X
    ("xi", "シィ"), ("xia", "シャ"), ("xie", "シェ"), ("xiao", "シャオ"), ("xiu", "シウ"), ("xian", "シエン"),
    ("xin", "シン"), ("xiang", "シアアン"), ("xing", "シイン"), ("xiong", "ション"), ("xu", "シュ"),
    ("xue", "シュエ"), ("xuan", "シュエン"), ("xun", "シュン"),
    // ZH
    ("zha", "ヂャー"), ("zhe", "ヂォー"), ("zhi", "ヂー"), ("zhai", "ヂャイ"), ("zhei", "ヂェイ"),
    ("zhao", "ヂャオ"), ("zhou", "ヂョウ"), ("zhan", "ヂャン"), ("zhen", "ヂェン"), ("zhang", "ヂャアン"),
    ("zheng", "ヂェン"), ("zhong", "ヂョオン"), ("zhu", "ヂュー"), ("zhua", "ヂュア"), ("zhuo", "ヂュオ"),
    ("zhuai", "ヂュアイ"), ("zhui", "ヂュイ"), ("zhun", "ヂュン"), ("zhuan", "ヂュアン"), ("zhuang", "ヂュアアン"),
    // CH
    ("cha", "チャー"), ("che", "チョー"), ("chi", "チー"), ("chai", "チャイ"), ("chao", "チャオ"),
    ("chou", "チョウ"), ("chan", "チャン"), ("chen", "チェン"), ("chang", "チャアン"), ("cheng", "チェン"),
    ("chong", "チョオン"), ("chu", "チュー"), ("chua", "チュア"), ("chuo", "チュオ"), ("chuai", "チュアイ"),
    ("chui", "チュイ"), ("chun", "チュン"), ("chuan", "チュアン"), ("chuang", "チュアアン"),
    // SH
    ("sha", "シャー"), ("she", "ショー"), ("shi", "シー"), ("shai", "シャイ"), ("shei", "シェイ"),
    ("shao", "シャオ"), ("shou", "ショウ"), ("shan", "シャン"), ("shen", "シェン"), ("shang", "シャアン"),
    ("sheng", "シェン"), ("shu", "シュー"), ("shua", "シュア"), ("shuo", "シュオ"), ("shuai", "シュアイ"),
    ("shui", "シュイ"), ("shun", "シュン"), ("shuan", "シュアン"),
    // R
    ("re", "ロー"), ("ri", "リー"), ("rao", "ラオ"), ("rou", "ロウ"), ("ran", "ラン"), ("ren", "レン"),
    ("rang", "ラアン"), ("reng", "レン"), ("rong", "ロオン"), ("ru", "ルー"), ("ruo", "ルオ"),
    ("rui", "ルイ"), ("run", "ルン"), ("ruan", "ルアン"),
    // Z
    ("za", "ザー"), ("ze", "ゾー"), ("zi", "ズー"), ("zai", "ザイ"), ("zei", "ゼイ"), ("zao", "ザオ"),
    ("zou", "ゾウ"), ("zan", "ザン"), ("zen", "ゼン"), ("zang", "ザアン"), ("zeng", "ゼン"),
    ("zong", "ゾオン"), ("zu", "ズー"), ("zuo", "ズオ"), ("zui", "ズイ"), ("zun", "ズン"), ("zuan", "ズアン"),
    // C
    ("ca", "ツァー"), ("ce", "ツォー"), ("ci", "ツー"), ("cai", "ツァイ"), ("cao", "ツァオ"), ("cou", "ツォウ"),
    ("can", "ツァン"), ("cen", "ツェン"), ("cang", "ツァアン"), ("ceng", "ツェン"), ("cong", "ツォン"),
    ("cu", "ツー"), ("cuo", "ツオ"), ("cui", "ツイ"), ("cun", "ツン"), ("cuan", "ツアン"),
    // S
    ("sa", "サー"), ("se", "ソー"), ("si", "スー"), ("sai", "サイ"), ("sao", "サオ"), ("sou", "ソウ"),
    ("san", "サン"), ("sen", "セン"), ("sang", "サアン"), ("seng", "セン"), ("song", "ソオン"),
    ("su", "スー"), ("suo", "スオ"), ("sui", "スイ"), ("sun", "スン"), ("suan", "スアン"),
    // Y, W
    ("ya", "ヤー"), ("yo", "ヨー"), ("ye", "イエ"), ("yao", "ヤオ"), ("you", "ヨウ"), ("yan", "イエン"),
    ("yin", "イン"), ("yang", "ヤン"), ("ying", "イン"), ("yong", "ヨン"), ("yi", "イー"), ("yu", "ユ"),
    ("yue", "ユエ"), ("yuan", "ユエン"), ("yun", "ユン"),
    ("wa", "ワー"), ("wo", "ウオ"), ("wai", "ワイ"), ("wei", "ウェイ"), ("wan", "ワン"), ("wen", "ウェン"),
    ("wang", "ワン"), ("weng", "ウォン"), ("wu", "ウー"),
];
