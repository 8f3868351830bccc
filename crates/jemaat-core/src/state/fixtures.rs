//! Seed data loaded when a session starts without a saved snapshot

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::{AppState, IdIssuer};
use crate::types::*;

/// Initial admin password
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, hour: u32, min: u32) -> DateTime<Utc> {
    date(y, m, d)
        .and_hms_opt(hour, min, 0)
        .unwrap_or_default()
        .and_utc()
}

#[allow(clippy::too_many_arguments)]
fn member(
    id: &str,
    name: &str,
    phone: &str,
    address: &str,
    joined_at: NaiveDate,
    birth_place: &str,
    birth_date: NaiveDate,
    is_baptized: bool,
) -> Member {
    Member {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        joined_at,
        photo_url: String::new(),
        birth_place: birth_place.to_string(),
        birth_date: Some(birth_date),
        is_baptized,
        wishes: Vec::new(),
        birthday_likes: Vec::new(),
    }
}

pub fn members() -> Vec<Member> {
    vec![
        member(
            "JM001",
            "Budi Santoso",
            "08123456789",
            "Jl. Mawar No. 10",
            date(2023, 1, 15),
            "Jakarta",
            date(1985, 5, 12),
            true,
        ),
        member(
            "JM002",
            "Siti Aminah",
            "08198765432",
            "Jl. Melati No. 5",
            date(2023, 2, 20),
            "Bandung",
            date(1990, 8, 25),
            true,
        ),
        member(
            "JM003",
            "Agus Wijaya",
            "08567891234",
            "Jl. Anggrek No. 12",
            date(2023, 3, 5),
            "Surabaya",
            date(1995, 12, 10),
            false,
        ),
    ]
}

pub fn devotionals() -> Vec<Devotional> {
    vec![
        Devotional {
            id: "R001".to_string(),
            title: "Kasih yang Memulihkan".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1504052434569-70ad5836ab65?auto=format&fit=crop&w=1000&q=80"
                    .to_string(),
            ),
            date: date(2024, 5, 20),
            verse: "Yohanes 3:16".to_string(),
            content: "Kasih Allah begitu besar bagi kita sehingga Ia memberikan Anak-Nya yang tunggal. \
                      Kasih ini bukan sekadar kata-kata, melainkan tindakan nyata yang menyelamatkan kita dari dosa dan maut.\n\n\
                      Ketika kita merasa sendirian atau tidak berharga, ingatlah bahwa Pencipta alam semesta ini mengasihi kita secara pribadi."
                .to_string(),
            author: "Pdt. Yohanes".to_string(),
            likes: 12,
            liked_by: vec!["JM002".to_string()],
            comments: vec![Comment {
                id: "C1".to_string(),
                user_id: "JM002".to_string(),
                user_name: "Siti Aminah".to_string(),
                content: "Amin, sangat memberkati!".to_string(),
                created_at: at(2024, 5, 20, 8, 0),
            }],
        },
        Devotional {
            id: "R002".to_string(),
            title: "Kekuatan dalam Kelemahan".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1499209974431-9dddcece7f88?auto=format&fit=crop&w=1000&q=80"
                    .to_string(),
            ),
            date: date(2024, 5, 19),
            verse: "2 Korintus 12:9".to_string(),
            content: "Seringkali kita berpikir bahwa kekuatan kita terletak pada kemampuan diri sendiri. \
                      Namun, Tuhan berkata bahwa dalam kelemahan kitalah kuasa-Nya menjadi sempurna."
                .to_string(),
            author: "Pdm. Sarah".to_string(),
            likes: 8,
            liked_by: Vec::new(),
            comments: Vec::new(),
        },
    ]
}

pub fn schedules() -> Vec<Schedule> {
    vec![Schedule {
        id: "J001".to_string(),
        service_type: ServiceType::IbadahRaya,
        date: date(2024, 5, 26),
        time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
        preacher: "Pdt. Yohanes".to_string(),
        worship_leader: "Bpk. Andreas".to_string(),
    }]
}

pub fn prayers() -> Vec<PrayerRequest> {
    vec![PrayerRequest {
        id: "P001".to_string(),
        user_id: "JM002".to_string(),
        user_name: "Siti Aminah".to_string(),
        content: "Mohon dukungan doa untuk kesembuhan ibu saya yang sedang dirawat di RS. \
                  Kiranya Tuhan jamah dan pulihkan."
            .to_string(),
        created_at: at(2024, 5, 25, 10, 0),
        likes: 5,
        liked_by: vec!["JM001".to_string()],
        comments: vec![Comment {
            id: "C1".to_string(),
            user_id: "JM001".to_string(),
            user_name: "Budi Santoso".to_string(),
            content: "Kami turut berdoa bu Siti. Tuhan Yesus tabib yang ajaib.".to_string(),
            created_at: at(2024, 5, 25, 10, 30),
        }],
    }]
}

pub fn tithes() -> Vec<Tithe> {
    vec![
        Tithe {
            id: "T001".to_string(),
            member_id: "JM001".to_string(),
            member_name: "Budi Santoso".to_string(),
            amount: 500_000,
            date: date(2024, 5, 1),
            method: TitheMethod::Transfer,
        },
        Tithe {
            id: "T002".to_string(),
            member_id: "JM002".to_string(),
            member_name: "Siti Aminah".to_string(),
            amount: 750_000,
            date: date(2024, 5, 5),
            method: TitheMethod::Tunai,
        },
    ]
}

pub fn expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: "E001".to_string(),
            description: "Bantuan Panti Asuhan Kasih".to_string(),
            amount: 2_000_000,
            date: date(2024, 5, 10),
            category: ExpenseCategory::Sosial,
        },
        Expense {
            id: "E002".to_string(),
            description: "Listrik & Air Gereja".to_string(),
            amount: 1_500_000,
            date: date(2024, 5, 12),
            category: ExpenseCategory::Operasional,
        },
    ]
}

pub fn slideshow() -> Vec<SlideshowImage> {
    let slide = |id: &str, url: &str, caption: &str| SlideshowImage {
        id: id.to_string(),
        url: url.to_string(),
        caption: caption.to_string(),
    };
    vec![
        slide(
            "S001",
            "https://images.unsplash.com/photo-1438232992991-995b7058bbb3?auto=format&fit=crop&w=1000&q=80",
            "Ibadah Raya Minggu",
        ),
        slide(
            "S002",
            "https://images.unsplash.com/photo-1544427920-24e832256f72?auto=format&fit=crop&w=1000&q=80",
            "Persekutuan Doa",
        ),
        slide(
            "S003",
            "https://images.unsplash.com/photo-1510590337019-5ef2d3977e9e?auto=format&fit=crop&w=1000&q=80",
            "Retreat Pemuda",
        ),
    ]
}

pub fn church_info() -> ChurchInfo {
    ChurchInfo {
        name: "GSJA Injil Sepenuh".to_string(),
        address: "Jl. Harapan Indah No. 123, Jakarta Pusat".to_string(),
        map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3966.46!2d106.8!3d-6.2".to_string(),
        whatsapp: "6281234567890".to_string(),
        logo_url: String::new(),
        vision: "Menjadi gereja yang memuliakan Tuhan dan menjadi berkat bagi bangsa.".to_string(),
        mission: "1. Memberitakan Injil\n2. Memuridkan Jemaat\n3. Melayani Masyarakat".to_string(),
    }
}

pub fn pastoral_team() -> Vec<Pastor> {
    vec![
        Pastor {
            id: "P001".to_string(),
            name: "Pdt. Yohanes Wijaya".to_string(),
            role: "Gembala Sidang".to_string(),
            photo_url: "https://images.unsplash.com/photo-1560250097-0b93528c311a?auto=format&fit=crop&w=500&q=80"
                .to_string(),
        },
        Pastor {
            id: "P002".to_string(),
            name: "Pdm. Sarah Susanti".to_string(),
            role: "Wakil Gembala".to_string(),
            photo_url: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&w=500&q=80"
                .to_string(),
        },
    ]
}

pub fn volunteers() -> Vec<Volunteer> {
    vec![Volunteer {
        id: "VOL-001".to_string(),
        user_id: "JM003".to_string(),
        user_name: "Agus Wijaya".to_string(),
        user_phone: "08567891234".to_string(),
        role: MinistryRole::Drum,
        status: VolunteerStatus::Pending,
        created_at: at(2024, 5, 26, 10, 0),
    }]
}

pub fn notifications() -> Vec<Notification> {
    vec![Notification {
        id: "N001".to_string(),
        title: "Pelayanan Baru".to_string(),
        message: "Agus Wijaya mendaftar sebagai Drum.".to_string(),
        kind: NotificationKind::Volunteer,
        is_read: false,
        created_at: at(2024, 5, 26, 10, 0),
        link_to: Some("/admin/volunteers".to_string()),
        target_user_id: None,
    }]
}

/// Full seed state with id counters primed from the seeded records
pub fn seed_state() -> AppState {
    let mut state = AppState {
        revision: 0,
        session: Session::default(),
        admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        church_info: church_info(),
        pastoral_team: pastoral_team(),
        members: members(),
        devotionals: devotionals(),
        schedules: schedules(),
        prayers: prayers(),
        feedback: Vec::new(),
        attendance: Vec::new(),
        tithes: tithes(),
        expenses: expenses(),
        slideshow: slideshow(),
        volunteers: volunteers(),
        notifications: notifications(),
        ids: IdIssuer::new(),
    };
    let mut ids = IdIssuer::new();
    ids.absorb(&state);
    state.ids = ids;
    state
}
