//! Static resume offered for download

pub const RESUME_FILENAME: &str = "Kamran_Bagwan_Resume.txt";
pub const RESUME_MIME: &str = "text/plain";

pub const RESUME_TEXT: &str = "KAMRAN BAGWAN
Gen AI Developer & Data Scientist

Contact:
Email: kamran123@gmail.com
Phone: +91 7249101884
Location: Pachora, Maharashtra, India

Skills:
- Frontend: React, Vue, Angular
- Backend: Node.js, Python
- AI/ML: Machine Learning, Data Science
- Mobile: React Native, Flutter

Projects:
1. E-Commerce Website - React, Node.js, MongoDB
2. Billing Software - Python, TKinter, SQLite
3. Digital CMS - HTML, CSS, JavaScript

Services:
- AI Development & Integration
- Web Development
- Mobile App Development
- UI/UX Design";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_shape() {
        assert!(RESUME_TEXT.starts_with("KAMRAN BAGWAN\n"));
        assert!(RESUME_TEXT.ends_with("UI/UX Design"));
        assert!(RESUME_FILENAME.ends_with(".txt"));
    }
}
