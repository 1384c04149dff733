//! Exercise definitions - egzersiz veritabanı

use serde::Serialize;

/// Category definition: URL-style key plus display title
#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub key: &'static str,
    pub title: &'static str,
}

/// Raw exercise definition as written in the table below.
/// Turned into an [`ExerciseRecord`] once, when the catalog is built.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseDef {
    pub category: &'static str,
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub video: &'static str,
    pub instructions: &'static [&'static str],
    pub sets: u32,
    pub reps: &'static str,
    pub rest_time_secs: u32,
    pub difficulty: &'static str,
    pub equipment: &'static str,
    pub target_muscles: &'static [&'static str],
    pub warnings: &'static [&'static str],
}

/// Prescribed reps: the original text and its parsed upper bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RepScheme {
    pub text: &'static str,
    pub max: Option<u32>,
}

impl RepScheme {
    /// Parse "<lo>-<hi>" into an upper bound of `hi`.
    ///
    /// Only the leading digits of the second token count ("10-15 sn" → 15).
    /// Free text like "Her yöne 2" has no upper bound.
    pub fn parse(text: &'static str) -> Self {
        let max = text.split('-').nth(1).and_then(|hi| {
            let hi = hi.trim_start();
            let digits = hi.find(|c: char| !c.is_ascii_digit()).unwrap_or(hi.len());
            hi[..digits].parse().ok()
        });
        Self { text, max }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Media {
    pub image: &'static str,
    /// Not rendered yet, the view shows a placeholder
    pub video: &'static str,
}

/// Immutable exercise record served by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub instructions: &'static [&'static str],
    pub sets: u32,
    pub reps: RepScheme,
    pub rest_time_secs: u32,
    pub difficulty: &'static str,
    pub equipment: &'static str,
    pub target_muscles: &'static [&'static str],
    pub warnings: &'static [&'static str],
    pub media: Media,
}

impl From<&ExerciseDef> for ExerciseRecord {
    fn from(def: &ExerciseDef) -> Self {
        ExerciseRecord {
            title: def.title,
            description: def.description,
            instructions: def.instructions,
            sets: def.sets,
            reps: RepScheme::parse(def.reps),
            rest_time_secs: def.rest_time_secs,
            difficulty: def.difficulty,
            equipment: def.equipment,
            target_muscles: def.target_muscles,
            warnings: def.warnings,
            media: Media {
                image: def.image,
                video: def.video,
            },
        }
    }
}

pub const CATEGORIES: &[CategoryDef] = &[
    CategoryDef { key: "boyun-sirt", title: "Boyun ve Sırt" },
    CategoryDef { key: "diz", title: "Diz" },
    CategoryDef { key: "omuz", title: "Omuz" },
    CategoryDef { key: "bel", title: "Bel" },
];

pub const EXERCISES: &[ExerciseDef] = &[
    // Boyun ve sırt
    ExerciseDef {
        category: "boyun-sirt",
        key: "boyun-germe",
        title: "Boyun Germe Egzersizi",
        description: "Boyun kaslarını gevşetmek ve boyun ağrılarını azaltmak için yapılan temel germe egzersizi. Özellikle uzun süre bilgisayar başında çalışanlar için faydalıdır.",
        image: "/neck-stretching-exercise-physiotherapy.jpg",
        video: "/neck-stretching-exercise-demonstration-animation.jpg",
        instructions: &[
            "Dik bir şekilde oturun veya ayakta durun",
            "Başınızı yavaşça sağa doğru eğin, kulağınızı omzunuza yaklaştırın",
            "15-30 saniye bu pozisyonda bekleyin",
            "Başınızı merkeze getirin ve sol tarafa tekrarlayın",
            "Hareket sırasında omuzlarınızı gevşek tutun",
        ],
        sets: 3,
        reps: "Her yöne 2",
        rest_time_secs: 30,
        difficulty: "Başlangıç",
        equipment: "Ekipman Yok",
        target_muscles: &["Levator Scapulae", "Üst Trapezius", "Sternokleidomastoid"],
        warnings: &[
            "Ani hareketlerden kaçının",
            "Ağrı hissederseniz durdurun",
            "Derin nefes almayı unutmayın",
        ],
    },
    ExerciseDef {
        category: "boyun-sirt",
        key: "kedi-deve",
        title: "Kedi-Deve Hareketi",
        description: "Omurga esnekliğini artıran ve sırt kaslarını gevşeten yoga kökenli bir fizyoterapi egzersizi.",
        image: "/placeholder.svg?height=600&width=800",
        video: "/cat-cow-exercise-demonstration-animation.jpg",
        instructions: &[
            "Dört ayak üzerinde pozisyon alın (el ve dizler yerde)",
            "Ellerinizi omuz hizasında, dizlerinizi kalça hizasında yerleştirin",
            "Nefes vererek sırtınızı yukarı doğru kambur yapın (Kedi)",
            "Nefes alarak göğsünüzü öne itip sırtınızı aşağı doğru çökertin (Deve)",
            "Hareketi yavaş ve kontrollü şekilde tekrarlayın",
        ],
        sets: 2,
        reps: "10-15",
        rest_time_secs: 30,
        difficulty: "Başlangıç",
        equipment: "Egzersiz Matı",
        target_muscles: &["Erector Spinae", "Abdominal Kaslar", "Torasik Omurga"],
        warnings: &["Boyun ve bel bölgesini aşırı zorlamayın", "Hareket akıcı olmalı"],
    },
    // Diz
    ExerciseDef {
        category: "diz",
        key: "kuadriseps-gucendirme",
        title: "Kuadriseps Güçlendirme",
        description: "Diz stabilitesini artıran ve kuadriseps kasını güçlendiren temel rehabilitasyon egzersizi.",
        image: "/knee-rehabilitation-exercises-physical-therapy.jpg",
        video: "/quadriceps-strengthening-exercise-demonstration.jpg",
        instructions: &[
            "Sandalyeye dik bir şekilde oturun",
            "Bir bacağınızı yavaşça düz bir şekilde kaldırın",
            "Ayak bileğinizi kendinize doğru çekin (dorsifleksiyon)",
            "Bacağınızı 5-10 saniye yukarıda tutun",
            "Yavaşça yere indirin ve diğer bacakla tekrarlayın",
        ],
        sets: 3,
        reps: "10-15",
        rest_time_secs: 45,
        difficulty: "Başlangıç",
        equipment: "Sandalye",
        target_muscles: &["Kuadriseps (Rectus Femoris, Vastus Lateralis)", "Vastus Medialis"],
        warnings: &["Diz ağrısı hissedersinizse durdurun", "Hareket yavaş ve kontrollü olmalı"],
    },
    // Omuz
    ExerciseDef {
        category: "omuz",
        key: "sarkaç",
        title: "Sarkaç Egzersizi (Pendulum)",
        description: "Omuz ağrıları ve donuk omuz için yapılan pasif hareket egzersizi. Omuz eklemini gevşetir ve hareket açıklığını artırır.",
        image: "/pendulum-shoulder-exercise-physiotherapy.jpg",
        video: "/shoulder-pendulum-exercise-demonstration-animation.jpg",
        instructions: &[
            "Bir masaya yaslanarak öne doğru eğilin",
            "Sağlıklı kolunuzla masaya destek olun",
            "Ağrılı kolunuzu sarkıtın ve gevşetin",
            "Kolunuzu küçük daireler çizerek sallamaya başlayın",
            "Önce saat yönünde, sonra ters yönde çevirin",
            "Kaslarınızı gevşek tutun, ağırlık sallanımı sağlasın",
        ],
        sets: 3,
        reps: "10 her yön",
        rest_time_secs: 30,
        difficulty: "Başlangıç",
        equipment: "Masa/Sandalye",
        target_muscles: &["Rotator Cuff", "Deltoid", "Omuz Kapsülü"],
        warnings: &["Kas gücü kullanmayın, salınım pasif olmalı", "Ağrı artarsa durdurun"],
    },
    // Bel
    ExerciseDef {
        category: "bel",
        key: "ayak-pompasi",
        title: "Ayak Pompası Egzersizi",
        description: "Ayak bileği ve alt bacak dolaşımını artıran, derin ven trombozu önleme egzersizi.",
        image: "/ankle-and-foot-physiotherapy-rehabilitation.jpg",
        video: "/ankle-pump-exercise-demonstration-animation.jpg",
        instructions: &[
            "Sırt üstü veya oturarak pozisyon alın",
            "Bacağınızı uzatın",
            "Ayak parmaklarınızı kendinize doğru çekin",
            "Sonra ayak parmaklarınızı öne doğru uzatın",
            "Hareketi ritmik bir şekilde tekrarlayın",
        ],
        sets: 3,
        reps: "15-20",
        rest_time_secs: 30,
        difficulty: "Başlangıç",
        equipment: "Ekipman Yok",
        target_muscles: &["Tibialis Anterior", "Gastroknemius", "Soleus"],
        warnings: &["Hareket yumuşak olmalı", "Kramp hissederseniz dinlenin"],
    },
];
