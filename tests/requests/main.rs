mod health;
mod landing;
mod middleware;
