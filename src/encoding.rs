//! Response encoding registry for the awareness survey.
//!
//! Holds the full encoding table for all 43 elementary items across the 11
//! indicator groups: for each item, the four literal answer options a
//! respondent can pick and the ordinal score (1-4) assigned to each. The
//! option strings are domain-expert judgments; changing or renumbering them
//! changes the meaning of every index downstream.
//!
//! The registry is static, immutable, process-lifetime data. Lookups are
//! exact string matches: an answer not present in an item's table scores 0.

/// One scored survey question: four literal answer options, each mapped to
/// an ordinal score in 1..=4.
pub struct ItemEncoding {
    pub code: &'static str,
    pub options: [(&'static str, u8); 4],
}

impl ItemEncoding {
    /// Returns the configured 1-4 score for an exact answer text.
    ///
    /// Unknown text (including whitespace or casing variants) scores 0.
    /// This fallback is the documented contract, not an error.
    pub fn score(&self, answer: &str) -> u8 {
        self.options
            .iter()
            .find(|(text, _)| *text == answer)
            .map(|(_, score)| *score)
            .unwrap_or(0)
    }
}

/// A named cluster of items forming one awareness sub-dimension.
pub struct IndicatorGroup {
    pub code: &'static str,
    pub name: &'static str,
    pub items: &'static [ItemEncoding],
}

impl IndicatorGroup {
    /// Maximum attainable raw score: 4 per member item.
    pub fn max_raw(&self) -> u32 {
        (self.items.len() * 4) as u32
    }
}

/// Total number of elementary items across all groups.
pub const ITEM_COUNT: usize = 43;

/// Scores an answer for an item by code. Unknown item codes score 0, same
/// as unknown answer text.
pub fn lookup(item_code: &str, answer: &str) -> u8 {
    ALL_GROUPS
        .iter()
        .flat_map(|g| g.items.iter())
        .find(|item| item.code == item_code)
        .map(|item| item.score(answer))
        .unwrap_or(0)
}

// SK: terms-and-conditions awareness during installation.
pub static SK: IndicatorGroup = IndicatorGroup {
    code: "SK",
    name: "Syarat & Ketentuan Instalasi",
    items: &[
        ItemEncoding {
            code: "SK1",
            options: [
                ("Saya tidak membacanya", 1),
                ("Saya hanya membaca pada poin penting", 2),
                ("Saya membacanya sekilas", 3),
                ("Saya membacanya dengan teliti", 4),
            ],
        },
        ItemEncoding {
            code: "SK2",
            options: [
                ("Saya mengizinkannya walaupun tidak memahami risikonya", 1),
                ("Saya tidak mengizinkannya karena tidak memahami risikonya", 2),
                (
                    "Saya tidak mengizinkannya karena ragu terhadap keamanan risikonya",
                    3,
                ),
                ("Saya mengizinkannya dengan memahami risikonya", 4),
            ],
        },
    ],
};

// KS: password hygiene.
pub static KS: IndicatorGroup = IndicatorGroup {
    code: "KS",
    name: "Kata Sandi",
    items: &[
        ItemEncoding {
            code: "KS1",
            options: [
                ("Saya mengabaikannya", 1),
                ("Saya menggunakan salah satu kombinasi", 2),
                ("Saya menggunakan beberapa kombinasi", 3),
                ("Saya menggunakan seluruh kombinasi", 4),
            ],
        },
        ItemEncoding {
            code: "KS2",
            options: [
                ("Saya membagikan password seluruh akun yang saya miliki", 1),
                (
                    "Saya membagikan password hanya kepada orang yang saya percayai",
                    2,
                ),
                ("Saya membagikannya ketika hanya ada urgensi", 3),
                (
                    "Saya tidak pernah membagikan password akun kepada siapapun",
                    4,
                ),
            ],
        },
        ItemEncoding {
            code: "KS3",
            options: [
                ("Tidak sama sekali", 1),
                ("Jika saya ingat saja", 2),
                ("Ya, setiap setahun sekali", 3),
                ("Ya, setiap tiga bulan sekali", 4),
            ],
        },
        ItemEncoding {
            code: "KS4",
            options: [
                ("Saya tidak menyimpan password saya", 1),
                (
                    "Saya tidak menyimpannya pada aplikasi penyimpan password",
                    2,
                ),
                (
                    "Saya menyimpannya pada aplikasi penyimpan password meskipun tidak tepercaya",
                    3,
                ),
                ("Saya menyimpannya pada aplikasi yang tepercaya", 4),
            ],
        },
        ItemEncoding {
            code: "KS5",
            options: [
                ("Setiap akun digital saya memiliki password yang sama", 1),
                ("Beberapa akun digital saya memiliki password yang sama", 2),
                (
                    "Satu sampai dua akun digital saya memiliki password yang sama",
                    3,
                ),
                (
                    "Setiap akun digital saya memiliki password yang berbeda-beda",
                    4,
                ),
            ],
        },
        ItemEncoding {
            code: "KS6",
            options: [
                ("Saya tidak mengetahuinya", 1),
                ("Saya tidak mengaktifkannya", 2),
                (
                    "Saya mengaktifkannya jika tidak mengunduh aplikasi tambahan",
                    3,
                ),
                (
                    "Saya mengaktifkannya walaupun harus menggunakan aplikasi tambahan",
                    4,
                ),
            ],
        },
    ],
};

// IW: internet and public WiFi habits.
pub static IW: IndicatorGroup = IndicatorGroup {
    code: "IW",
    name: "Internet & WiFi",
    items: &[
        ItemEncoding {
            code: "IW1",
            options: [
                ("Saya tidak menyadari risikonya", 1),
                ("Saya menyadari risikonya tetapi tetap mengekliknya", 2),
                ("Saya menyadari risikonya dan mengabaikan tautannya", 3),
                (
                    "Saya menyadari risikonya dan mengecek validitas sumbernya",
                    4,
                ),
            ],
        },
        ItemEncoding {
            code: "IW2",
            options: [
                ("Saya tidak menyadari risikonya sama sekali", 1),
                ("Saya tidak terlalu menyadari risikonya", 2),
                ("Saya menyadari risikonya tetapi saya tidak peduli", 3),
                ("Saya sangat menyadari risikonya dan selalu waspada", 4),
            ],
        },
        ItemEncoding {
            code: "IW3",
            options: [
                ("Saya sering mengunjungi situs yang mencurigakan", 1),
                ("Saya kadang-kadang mengunjungi situs yang mencurigakan", 2),
                (
                    "Saya jarang mengunjungi situs yang mencurigakan secara tidak sengaja",
                    3,
                ),
                ("Saya tidak pernah mengunjungi situs yang mencurigakan", 4),
            ],
        },
        ItemEncoding {
            code: "IW4",
            options: [
                ("Saya selalu menggunakan jaringan publik", 1),
                ("Saya sering menggunakan jaringan publik", 2),
                ("Saya kadang-kadang menggunakan jaringan publik", 3),
                ("Saya tidak pernah menggunakan jaringan publik", 4),
            ],
        },
        ItemEncoding {
            code: "IW5",
            options: [
                ("Saya tidak pernah memastikannya", 1),
                ("Saya kadang-kadang memastikannya", 2),
                ("Saya sering memastikannya", 3),
                ("Saya selalu memastikannya", 4),
            ],
        },
    ],
};

// KP: device protection.
pub static KP: IndicatorGroup = IndicatorGroup {
    code: "KP",
    name: "Keamanan Perangkat",
    items: &[
        ItemEncoding {
            code: "KP1",
            options: [
                ("Saya tidak pernah melakukan update software", 1),
                ("Saya jarang melakukan update software", 2),
                (
                    "Saya melakukan update secara berkala terutama saat menerima pemberitahuan",
                    3,
                ),
                ("Saya selalu melakukan update software secara rutin", 4),
            ],
        },
        ItemEncoding {
            code: "KP2",
            options: [
                (
                    "Saya tidak pernah memasang antivirus pada perangkat digital",
                    1,
                ),
                ("Saya mengandalkan perlindungan bawaan dari sistem operasi", 2),
                (
                    "Saya hanya memasang antivirus pada beberapa perangkat digital saya tergantung kebutuhan dan aktivitas online saya",
                    3,
                ),
                (
                    "Saya selalu memasang antivirus pada semua perangkat digital saya",
                    4,
                ),
            ],
        },
        ItemEncoding {
            code: "KP3",
            options: [
                (
                    "Saya selalu mengunduh aplikasi dari penyedia yang tidak resmi",
                    1,
                ),
                (
                    "Saya terkadang mengunduh aplikasi dari sumber yang tidak resmi ketika aplikasi tersebut tidak tersedia dari penyedia resmi",
                    2,
                ),
                (
                    "Saya beberapa kali mengunduh aplikasi dari penyedia aplikasi resmi",
                    3,
                ),
                (
                    "Saya hanya mengunduh aplikasi dari penyedia aplikasi resmi seperti Google Play Store atau Apple Store",
                    4,
                ),
            ],
        },
        ItemEncoding {
            code: "KP4",
            options: [
                ("Saya tidak pernah melakukan update antivirus", 1),
                ("Saya jarang melakukan update antivirus", 2),
                (
                    "Saya melakukan update secara berkala terutama saat menerima pemberitahuan",
                    3,
                ),
                ("Saya selalu melakukan update antivirus secara rutin", 4),
            ],
        },
        ItemEncoding {
            code: "KP5",
            options: [
                (
                    "Saya tidak mengetahui mengenai pengaturan penonaktifkan posisi geografis",
                    1,
                ),
                ("Saya mengaktifkan posisi geografis perangkat digital", 2),
                (
                    "Saya menonaktifkan posisi geografis perangkat saya dalam situasi tertentu",
                    3,
                ),
                (
                    "Saya selalu menonaktifkan posisi geografis perangkat saya ketika tidak digunakan",
                    4,
                ),
            ],
        },
        ItemEncoding {
            code: "KP6",
            options: [
                ("Saya tidak pernah melakukan backup data", 1),
                ("Saya jarang melakukan backup data", 2),
                (
                    "Saya melakukan backup data secara berkala terutama saat menerima pemberitahuan",
                    3,
                ),
                ("Saya selalu melakukan backup data secara rutin", 4),
            ],
        },
    ],
};

// AT: technical incident reporting channels.
pub static AT: IndicatorGroup = IndicatorGroup {
    code: "AT",
    name: "Aduan Insiden Siber Teknis",
    items: &[
        ItemEncoding {
            code: "AT1",
            options: [
                (
                    "Saya tidak mengetahui sama sekali pihak berwenang dalam penanganan insiden siber",
                    1,
                ),
                (
                    "Saya hanya mengetahui beberapa pihak berwenang dalam penanganan insiden siber",
                    2,
                ),
                (
                    "Saya mengetahui semua pihak berwenang dalam penanganan insiden siber, namun tidak tahu cara menghubunginya",
                    3,
                ),
                (
                    "Saya mengetahui semua pihak berwenang dalam penanganan insiden siber dan tahu cara menghubunginya",
                    4,
                ),
            ],
        },
        ItemEncoding {
            code: "AT2",
            options: [
                ("Saya tidak melaporkannya kepada pihak berwenang", 1),
                (
                    "Saya ragu untuk melaporkannya kepada pihak berwenang karena tidak yakin akan ditindak",
                    2,
                ),
                (
                    "Saya menunda melaporkannya kepada pihak berwenang karena mencoba menyelesaikannya sendiri",
                    3,
                ),
                ("Saya langsung melaporkannya kepada pihak berwenang", 4),
            ],
        },
        ItemEncoding {
            code: "AT3",
            options: [
                ("Saya tidak mengetahui BSSN memiliki layanan aduan siber", 1),
                ("Saya pernah mendengar BSSN memiliki layanan aduan siber", 2),
                (
                    "Saya mengetahui namun tidak paham mekanisme pelaporan layanan aduan siber BSSN",
                    3,
                ),
                (
                    "Saya mengetahui dan paham mekanisme pelaporan layanan aduan siber BSSN",
                    4,
                ),
            ],
        },
    ],
};

// HT: knowledge of technical cyber-security regulation.
pub static HT: IndicatorGroup = IndicatorGroup {
    code: "HT",
    name: "Hukum & Regulasi Keamanan Siber Teknis",
    items: &[
        ItemEncoding {
            code: "HT1",
            options: [
                ("Saya tidak tahu pemerintah memiliki aturan tersebut", 1),
                ("Saya pernah mendengar pemerintah memiliki aturan tersebut", 2),
                ("Saya tidak tahu secara detail", 3),
                ("Saya tahu secara detail", 4),
            ],
        },
        ItemEncoding {
            code: "HT2",
            options: [
                (
                    "Saya pernah melakukannya walaupun tahu jika itu dilarang",
                    1,
                ),
                (
                    "Saya pernah melakukan karena tidak mengetahui jika itu dilarang",
                    2,
                ),
                (
                    "Saya tidak pernah melakukannya namun tidak tahu jika itu dilarang",
                    3,
                ),
                (
                    "Saya tidak pernah melakukan karena saya tahu itu dilarang",
                    4,
                ),
            ],
        },
    ],
};

// RS: social engineering awareness.
pub static RS: IndicatorGroup = IndicatorGroup {
    code: "RS",
    name: "Rekayasa Sosial",
    items: &[
        ItemEncoding {
            code: "RS1",
            options: [
                (
                    "Saya tidak menyadari dan tidak mengetahui adanya penipuan online",
                    1,
                ),
                (
                    "Saya tidak menyadari adanya praktik tersebut namun mengetahui adanya penipuan online",
                    2,
                ),
                (
                    "Saya sadar tapi kurang berhati-hati dalam berinteraksi online",
                    3,
                ),
                (
                    "Saya sadar dan selalu berhati-hati dalam berinteraksi online",
                    4,
                ),
            ],
        },
        ItemEncoding {
            code: "RS2",
            options: [
                ("Saya selalu berbagi informasi pribadi", 1),
                ("Saya sering berbagi informasi pribadi", 2),
                ("Saya jarang membagikan informasi pribadi", 3),
                ("Saya tidak pernah membagikan informasi pribadi", 4),
            ],
        },
        ItemEncoding {
            code: "RS3",
            options: [
                ("Saya tidak mengerti dan tidak peduli", 1),
                ("Saya tidak mengerti hal tersebut penting bagi data saya", 2),
                (
                    "Saya mengerti hal tersebut penting tapi tidak tahu manfaatnya",
                    3,
                ),
                (
                    "Saya mengerti hal tersebut penting demi mencegah manipulasi data",
                    4,
                ),
            ],
        },
        ItemEncoding {
            code: "RS4",
            options: [
                ("Saya tidak pernah melakukan pengecekan", 1),
                ("Saya jarang melakukan pengecekan", 2),
                ("Saya sering melakukan pengecekan", 3),
                ("Saya selalu melakukan pengecekan", 4),
            ],
        },
        ItemEncoding {
            code: "RS5",
            options: [
                ("Saya tidak minat dengan keamanan siber", 1),
                ("Saya tidak minat namun mengetahui ancamannya", 2),
                (
                    "Saya berupaya namun tidak selalu meningkatkan literasi keamanan siber",
                    3,
                ),
                (
                    "Saya berupaya dan selalu meningkatkan literasi keamanan siber",
                    4,
                ),
            ],
        },
        ItemEncoding {
            code: "RS6",
            options: [
                (
                    "Saya tidak mengetahui definisinya maupun bentuk praktik rekayasa sosial",
                    1,
                ),
                (
                    "Saya hanya mengetahui definisinya namun tidak mengetahui bentuk praktik rekayasa sosial",
                    2,
                ),
                (
                    "Saya mengetahui bentuk praktik rekayasa sosial hanya pada beberapa media",
                    3,
                ),
                (
                    "Saya mengetahui bentuk praktik rekayasa sosial pada media apapun",
                    4,
                ),
            ],
        },
    ],
};

// KN: negative content handling.
pub static KN: IndicatorGroup = IndicatorGroup {
    code: "KN",
    name: "Konten Negatif",
    items: &[
        ItemEncoding {
            code: "KN1",
            options: [
                ("Saya selalu menyebarkannya", 1),
                ("Saya sering menyebarkannya", 2),
                ("Saya jarang menyebarkannya", 3),
                ("Saya tidak pernah menyebarkannya", 4),
            ],
        },
        ItemEncoding {
            code: "KN2",
            options: [
                (
                    "Saya langsung percaya dan langsung meneruskannya kebenaran informasi tersebut",
                    1,
                ),
                (
                    "Saya tidak langsung percaya dan tidak memastikan kebenaran informasi tersebut",
                    2,
                ),
                (
                    "Saya tidak langsung percaya dan memastikan kebenaran informasi tersebut",
                    3,
                ),
                (
                    "Saya tidak langsung percaya, memastikannya dan meneruskan kebenaran informasi tersebut",
                    4,
                ),
            ],
        },
        ItemEncoding {
            code: "KN3",
            options: [
                ("Saya selalu menyebarkannya", 1),
                ("Saya sering menyebarkannya", 2),
                ("Saya jarang menyebarkannya", 3),
                ("Saya tidak pernah menyebarkannya", 4),
            ],
        },
    ],
};

// AM: social media activity.
pub static AM: IndicatorGroup = IndicatorGroup {
    code: "AM",
    name: "Aktivitas Media Sosial",
    items: &[
        ItemEncoding {
            code: "AM1",
            options: [
                (
                    "Saya tidak mengetahui mengenai pengaturan privasi pada media sosial",
                    1,
                ),
                (
                    "Saya tidak mengaktifkan pengaturan privasi pada media sosial",
                    2,
                ),
                (
                    "Saya mengaktifkan pengaturan privasi pada media sosial saya dalam situasi tertentu",
                    3,
                ),
                (
                    "Saya selalu mengaktifkan pengaturan privasi pada media sosial saya",
                    4,
                ),
            ],
        },
        ItemEncoding {
            code: "AM2",
            options: [
                ("Saya selalu membagikannya", 1),
                ("Saya sering membagikannya", 2),
                ("Saya jarang membagikannya", 3),
                ("Saya tidak pernah membagikannya", 4),
            ],
        },
        ItemEncoding {
            code: "AM3",
            options: [
                ("Saya tidak peduli", 1),
                ("Saya merasa perlu namun belum melakukan sepenuhnya", 2),
                ("Saya sudah melakukannya", 3),
                (
                    "Saya sudah melakukannya dan mengingatkan orang lain untuk bersikap positif",
                    4,
                ),
            ],
        },
        ItemEncoding {
            code: "AM4",
            options: [
                (
                    "Saya tidak menyadari dampak negatifnya dan berlebihan menggunakan media sosial",
                    1,
                ),
                (
                    "Saya tidak menyadari dampak negatifnya dan banyak menggunakan media sosial",
                    2,
                ),
                (
                    "Saya menyadari dampak negatifnya namun banyak menggunakan media sosial",
                    3,
                ),
                (
                    "Saya menyadari dampak negatifnya dan menggunakan media sosial dengan bijak",
                    4,
                ),
            ],
        },
        ItemEncoding {
            code: "AM5",
            options: [
                ("Saya merasa tidak perlu melakukannya", 1),
                ("Saya merasa perlu namun belum melakukannya", 2),
                (
                    "Saya sudah melakukannya namun hanya kepada orang yang saya kenal",
                    3,
                ),
                ("Saya sudah melakukannya", 4),
            ],
        },
    ],
};

// AS: negative-content reporting channels.
pub static AS: IndicatorGroup = IndicatorGroup {
    code: "AS",
    name: "Aduan Insiden Siber Sosial",
    items: &[
        ItemEncoding {
            code: "AS1",
            options: [
                (
                    "Saya tidak mengetahui sama sekali pihak berwenang dalam penanganan konten negatif",
                    1,
                ),
                (
                    "Saya hanya mengetahui beberapa pihak berwenang dalam penanganan konten negatif",
                    2,
                ),
                (
                    "Saya mengetahui semua pihak berwenang dalam penanganan konten negatif, namun tidak tahu cara menghubunginya",
                    3,
                ),
                (
                    "Saya mengetahui semua pihak berwenang dalam penanganan konten negatif dan tahu cara menghubunginya",
                    4,
                ),
            ],
        },
        ItemEncoding {
            code: "AS2",
            options: [
                ("Saya tidak pernah melaporkannya", 1),
                ("Saya jarang melaporkannya", 2),
                ("Saya sering melaporkannya", 3),
                ("Saya selalu melaporkannya", 4),
            ],
        },
        ItemEncoding {
            code: "AS3",
            options: [
                (
                    "Saya tidak mengetahui BSSN memiliki layanan Lapor Konten",
                    1,
                ),
                (
                    "Saya pernah mendengar BSSN memiliki layanan Lapor Konten",
                    2,
                ),
                (
                    "Saya mengetahui namun tidak paham mekanisme layanan Lapor Konten BSSN",
                    3,
                ),
                (
                    "Saya mengetahui dan paham mekanisme layanan Lapor Konten BSSN",
                    4,
                ),
            ],
        },
    ],
};

// HS: knowledge of social cyber-security regulation.
pub static HS: IndicatorGroup = IndicatorGroup {
    code: "HS",
    name: "Hukum & Regulasi Keamanan Siber Sosial",
    items: &[
        ItemEncoding {
            code: "HS1",
            options: [
                ("Saya tidak tahu pemerintah memiliki aturan tersebut", 1),
                ("Saya pernah mendengar pemerintah memiliki aturan tersebut", 2),
                ("Saya tidak tahu secara detail", 3),
                ("Saya tahu secara detail", 4),
            ],
        },
        ItemEncoding {
            code: "HS2",
            options: [
                ("Saya tidak peduli dengan hal tersebut", 1),
                (
                    "Saya tidak percaya pihak berwenang akan menegakkan aturan tersebut",
                    2,
                ),
                (
                    "Saya hanya mempercayai sebagian pihak berwenang akan menegakkan aturan tersebut",
                    3,
                ),
                (
                    "Saya percaya seluruh pihak berwenang akan menegakkan aturan tersebut",
                    4,
                ),
            ],
        },
    ],
};

/// The six technical groups, in canonical column order.
pub static TECHNICAL_GROUPS: [&IndicatorGroup; 6] = [&SK, &KS, &IW, &KP, &AT, &HT];

/// The five social groups, in canonical column order.
pub static SOCIAL_GROUPS: [&IndicatorGroup; 5] = [&RS, &KN, &AM, &AS, &HS];

/// All groups, technical first, in the canonical order the 43 answer
/// columns follow.
pub static ALL_GROUPS: [&IndicatorGroup; 11] =
    [&SK, &KS, &IW, &KP, &AT, &HT, &RS, &KN, &AM, &AS, &HS];
