use crate::model::*;

const IMAGE_BASE: &str = "https://images.unsplash.com";

fn image(photo: &str) -> String {
    format!("{}/{}?auto=format&fit=crop&q=80&w=1000", IMAGE_BASE, photo)
}

fn club(
    id: &str,
    name: &str,
    description: &str,
    full_description: &str,
    category: &str,
    photo: &str,
    member_count: u32,
    leads: Option<Vec<ClubLead>>,
) -> Club {
    Club {
        id: Id::new(id),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        image: image(photo),
        member_count,
        full_description: Some(full_description.to_string()),
        leads,
    }
}

pub fn clubs() -> Vec<Club> {
    vec![
        club(
            "mulearn",
            "Mulearn",
            "A community for peer-to-peer learning and upskilling in technology.",
            "Mulearn is the campus chapter of the GTech Mulearn initiative. We focus on creating a culture of learning by doing. Our activities include study jams, hackathons, and mentorship programs designed to bridge the gap between industry and academia.",
            "Tech Community",
            "photo-1531482615713-2afd69097998",
            154,
            Some(vec![
                ClubLead::new("Alice Smith", "Campus Lead"),
                ClubLead::new("Bob Jones", "Tech Lead"),
            ]),
        ),
        club(
            "ieee",
            "IEEE",
            "The world's largest technical professional organization dedicated to advancing technology.",
            "The IEEE Student Branch at PEC is committed to providing students with opportunities to grow technically and professionally. We organize conferences, technical talks, and industrial visits.",
            "Professional Body",
            "photo-1523580494863-6f3031224c94",
            89,
            Some(vec![ClubLead::new("Sarah Lee", "Chair")]),
        ),
        club(
            "csi",
            "CSI",
            "Computer Society of India - promoting research and knowledge sharing.",
            "CSI PEC Student Chapter focuses on research and development in Computer Science. We host coding competitions and research seminars.",
            "Professional Body",
            "photo-1517245386807-bb43f82c33c4",
            65,
            None,
        ),
        club(
            "icfoss",
            "ICFOSS",
            "International Centre for Free and Open Source Software.",
            "Promoting the philosophy of Free and Open Source Software (FOSS). We conduct Linux install fests and contribution workshops.",
            "Open Source",
            "photo-1556761175-5973dc0f32e7",
            42,
            None,
        ),
        club(
            "iedc",
            "IEDC",
            "Innovation and Entrepreneurship Development Centre.",
            "IEDC works to cultivate an innovation culture. We support startups, provide incubation support, and help students convert ideas into products.",
            "Entrepreneurship",
            "photo-1519389950473-47ba0277781c",
            112,
            None,
        ),
        club(
            "yip",
            "YIP",
            "Young Innovators Programme - fostering innovation among youth.",
            "YIP is a government initiative to find and mentor young talent. We provide guidance for the YIP challenge and other state-level innovation contests.",
            "Innovation",
            "photo-1531545514256-b1400bc00f31",
            30,
            None,
        ),
    ]
}

fn event(
    id: &str,
    title: &str,
    date: &str,
    time: &str,
    location: &str,
    (club_id, club_name): (&str, &str),
    description: &str,
    tags: &[&str],
    category: EventCategory,
) -> Event {
    Event {
        id: Id::new(id),
        title: title.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        club_id: Id::new(club_id),
        club_name: club_name.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        category,
    }
}

pub fn events() -> Vec<Event> {
    vec![
        event(
            "e1",
            "Hack The Future",
            "Nov 12, 2023",
            "09:00 AM",
            "Main Auditorium",
            ("mulearn", "Mulearn"),
            "24-hour hackathon focused on AI and sustainability.",
            &["Hackathon", "AI", "Coding"],
            EventCategory::Technical,
        ),
        event(
            "e2",
            "IEEE Global Summit",
            "Nov 15, 2023",
            "10:00 AM",
            "Seminar Hall 1",
            ("ieee", "IEEE"),
            "Networking event with industry leaders.",
            &["Networking", "Seminar"],
            EventCategory::Seminar,
        ),
        event(
            "e3",
            "Startup Pitch Day",
            "Nov 20, 2023",
            "02:00 PM",
            "Incubation Center",
            ("iedc", "IEDC"),
            "Pitch your startup ideas to investors.",
            &["Startup", "Pitch"],
            EventCategory::Workshop,
        ),
        event(
            "e4",
            "Cultural Night",
            "Nov 25, 2023",
            "05:00 PM",
            "Open Air Theatre",
            (GENERAL_CLUB_ID, "Arts Club"),
            "A night of music, dance, and celebration.",
            &["Music", "Dance"],
            EventCategory::Cultural,
        ),
        event(
            "e5",
            "Python Bootcamp",
            "Dec 01, 2023",
            "10:00 AM",
            "Lab 2",
            ("mulearn", "Mulearn"),
            "Beginner friendly python workshop.",
            &["Python", "Coding"],
            EventCategory::Workshop,
        ),
    ]
}

fn notice(id: &str, title: &str, date: &str, notice_type: NoticeType, content: &str) -> Notice {
    Notice {
        id: Id::new(id),
        title: title.to_string(),
        date: date.to_string(),
        notice_type,
        content: content.to_string(),
    }
}

pub fn notices() -> Vec<Notice> {
    vec![
        notice(
            "1",
            "Semester Exam Registration",
            "Oct 24, 2023",
            NoticeType::Urgent,
            "Final date for registration is Oct 30th.",
        ),
        notice(
            "2",
            "Tech Fest \"Ignite\" Announced",
            "Oct 22, 2023",
            NoticeType::Info,
            "Prepare for the biggest tech fest of the year.",
        ),
        notice(
            "3",
            "Library Hours Extended",
            "Oct 20, 2023",
            NoticeType::Academic,
            "Library will remain open until 8 PM during study week.",
        ),
        notice(
            "4",
            "Scholarship Applications Open",
            "Oct 18, 2023",
            NoticeType::Info,
            "Merit-based scholarships available for 3rd years.",
        ),
    ]
}
