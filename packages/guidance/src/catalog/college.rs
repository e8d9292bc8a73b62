use serde::Serialize;

use super::Searchable;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct College {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub r#type: &'static str,
    pub rating: f32,
    pub students: &'static str,
    pub courses: &'static str,
    pub fees: &'static str,
    pub website: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub established: &'static str,
    pub accreditation: &'static [&'static str],
}

impl Searchable for College {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.location, self.r#type]
    }
}

pub const COLLEGES: &[College] = &[
    College {
        id: "1",
        name: "Karpagam College of Engineering",
        location: "Coimbatore, Tamil Nadu",
        r#type: "Private Engineering College",
        rating: 4.2,
        students: "3000+",
        courses: "15+",
        fees: "₹1.2L - ₹2.5L per year",
        website: "https://www.kce.ac.in",
        phone: "+91-422-2611146",
        email: "info@kce.ac.in",
        description: "Karpagam College of Engineering is a premier engineering institution in Coimbatore, known for its excellent academic programs and industry connections.",
        image: "https://images.pexels.com/photos/207692/pexels-photo-207692.jpeg?auto=compress&cs=tinysrgb&w=800",
        established: "1999",
        accreditation: &["AICTE", "NBA", "NAAC A+"],
    },
    College {
        id: "2",
        name: "PSG College of Technology",
        location: "Coimbatore, Tamil Nadu",
        r#type: "Private Engineering College",
        rating: 4.5,
        students: "4500+",
        courses: "20+",
        fees: "₹2.5L - ₹4L per year",
        website: "https://www.psgtech.edu",
        phone: "+91-422-2572177",
        email: "principal@psgtech.ac.in",
        description: "PSG College of Technology is one of the most prestigious engineering colleges in South India with excellent placement records.",
        image: "https://images.pexels.com/photos/1454360/pexels-photo-1454360.jpeg?auto=compress&cs=tinysrgb&w=800",
        established: "1951",
        accreditation: &["AICTE", "NBA", "NAAC A++"],
    },
    College {
        id: "3",
        name: "Coimbatore Institute of Technology",
        location: "Coimbatore, Tamil Nadu",
        r#type: "Private Engineering College",
        rating: 4.3,
        students: "3500+",
        courses: "18+",
        fees: "₹1.8L - ₹3.2L per year",
        website: "https://www.cit.edu.in",
        phone: "+91-422-2697792",
        email: "info@cit.edu.in",
        description: "CIT is known for its strong engineering programs and excellent faculty with modern infrastructure and research facilities.",
        image: "https://images.pexels.com/photos/1595391/pexels-photo-1595391.jpeg?auto=compress&cs=tinysrgb&w=800",
        established: "1956",
        accreditation: &["AICTE", "NBA", "NAAC A"],
    },
    College {
        id: "4",
        name: "Kumaraguru College of Technology",
        location: "Coimbatore, Tamil Nadu",
        r#type: "Private Engineering College",
        rating: 4.4,
        students: "4000+",
        courses: "22+",
        fees: "₹2.2L - ₹3.8L per year",
        website: "https://www.kct.ac.in",
        phone: "+91-422-2669000",
        email: "info@kct.ac.in",
        description: "KCT is renowned for its innovative teaching methods and strong industry partnerships providing excellent career opportunities.",
        image: "https://images.pexels.com/photos/1438081/pexels-photo-1438081.jpeg?auto=compress&cs=tinysrgb&w=800",
        established: "1984",
        accreditation: &["AICTE", "NBA", "NAAC A+"],
    },
    College {
        id: "5",
        name: "Sri Krishna College of Engineering and Technology",
        location: "Coimbatore, Tamil Nadu",
        r#type: "Private Engineering College",
        rating: 4.1,
        students: "2800+",
        courses: "16+",
        fees: "₹1.5L - ₹2.8L per year",
        website: "https://www.skcet.ac.in",
        phone: "+91-422-2604567",
        email: "info@skcet.ac.in",
        description: "SKCET focuses on holistic development with strong emphasis on practical learning and skill development.",
        image: "https://images.pexels.com/photos/1454360/pexels-photo-1454360.jpeg?auto=compress&cs=tinysrgb&w=800",
        established: "1985",
        accreditation: &["AICTE", "NBA", "NAAC A"],
    },
];
