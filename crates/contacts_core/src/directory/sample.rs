//! Built-in sample contacts used until a real contact source is wired in.

use crate::model::contact::Contact;

/// Returns the fixed eight-contact sample set, in display order.
pub fn sample_contacts() -> Vec<Contact> {
    [
        (1, "Nguyễn Văn An", "0901234567", "an.nguyen@email.com"),
        (2, "Trần Thị Bình", "0907654321", "binh.tran@email.com"),
        (3, "Lê Văn Cường", "0912345678", "cuong.le@email.com"),
        (4, "Phạm Thị Dung", "0987654321", "dung.pham@email.com"),
        (5, "Hoàng Văn Em", "0923456789", "em.hoang@email.com"),
        (6, "Vũ Thị Phương", "0934567890", "phuong.vu@email.com"),
        (7, "Đặng Văn Giang", "0945678901", "giang.dang@email.com"),
        (8, "Ngô Thị Hồng", "0956789012", "hong.ngo@email.com"),
    ]
    .into_iter()
    .map(|(id, name, phone, email)| Contact::new(id, name, phone).with_email(email))
    .collect()
}
